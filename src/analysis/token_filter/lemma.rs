//! Lemmatization token filter.
//!
//! Replaces each token with its dictionary (normal) form, as decided by a
//! [`MorphAnalyzer`]. The token is lowercased before lookup, the analyzer's
//! first (highest-confidence) parse wins, and a form the analyzer doesn't
//! recognize falls back to the lowercased form itself. The filter emits
//! exactly one output token per input token, in the same order.

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::morphology::MorphAnalyzer;

/// Filter that replaces token text with its normal form.
pub struct LemmaFilter {
    /// The morphological analyzer to consult.
    morphology: Arc<dyn MorphAnalyzer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("morphology", &self.morphology.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a lemma filter backed by the given analyzer.
    pub fn new(morphology: Arc<dyn MorphAnalyzer>) -> Self {
        LemmaFilter { morphology }
    }

    /// Get the analyzer used by this filter.
    pub fn morphology(&self) -> &Arc<dyn MorphAnalyzer> {
        &self.morphology
    }

    /// Normalize a single word form: lowercase it, take the first parse's
    /// normal form, or keep the lowercased form when no parse is returned.
    pub fn normal_form(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        self.morphology
            .parse(&lowered)
            .into_iter()
            .next()
            .map(|parse| parse.normal_form)
            .unwrap_or(lowered)
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let normal = self.normal_form(&token.text);
                    token.with_text(normal)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::morphology::DictionaryMorphology;

    fn test_morphology() -> Arc<dyn MorphAnalyzer> {
        Arc::new(DictionaryMorphology::from_pairs(vec![
            ("коты", "кот"),
            ("бежали", "бежать"),
        ]))
    }

    #[test]
    fn test_lemma_filter() {
        let filter = LemmaFilter::new(test_morphology());
        let tokens = vec![Token::new("коты", 0), Token::new("бежали", 1)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "кот");
        assert_eq!(result[1].text, "бежать");
    }

    #[test]
    fn test_lowercases_before_lookup() {
        let filter = LemmaFilter::new(test_morphology());
        let tokens = vec![Token::new("Коты", 0)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result[0].text, "кот");
    }

    #[test]
    fn test_unknown_form_falls_back() {
        let filter = LemmaFilter::new(test_morphology());
        let tokens = vec![Token::new("Квазимодо", 0)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "квазимодо");
    }

    #[test]
    fn test_one_output_per_input() {
        let filter = LemmaFilter::new(test_morphology());
        let tokens = vec![
            Token::new("коты", 0),
            Token::new("коты", 1),
            Token::new("неизвестное", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "кот");
        assert_eq!(result[1].text, "кот");
    }

    #[test]
    fn test_skips_stopped_tokens() {
        let filter = LemmaFilter::new(test_morphology());
        let tokens = vec![Token::new("коты", 0).stop()];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result[0].text, "коты");
        assert!(result[0].is_stopped());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LemmaFilter::new(test_morphology()).name(), "lemma");
    }
}
