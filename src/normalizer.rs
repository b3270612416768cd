//! High-level text normalization surface.
//!
//! [`TextNormalizer`] bundles the whole pipeline (compiled tag and token
//! patterns, the stop-word set, and the morphological analyzer handle) into
//! one explicitly constructed, read-only context object. Construct it once
//! and reuse it for every call; all per-call state is transient.
//!
//! The four operations compose in whatever order the caller needs:
//!
//! ```text
//! raw text → clean → remove_stop_words → normalize → lemma list
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use morfema::TextNormalizer;
//! use morfema::morphology::DictionaryMorphology;
//!
//! let morphology = Arc::new(DictionaryMorphology::from_pairs(vec![
//!     ("коты", "кот"),
//!     ("бежали", "бежать"),
//! ]));
//! let normalizer = TextNormalizer::new(morphology).unwrap();
//!
//! let tokens = normalizer.clean("<b>Коты бежали домой!</b>").unwrap();
//! assert_eq!(tokens, vec!["коты", "бежали", "домой"]);
//!
//! let content = normalizer.remove_stop_words(&tokens);
//! let lemmas = normalizer.normalize(&content).unwrap();
//! assert_eq!(lemmas, vec!["кот", "бежать", "домой"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::TagStripCharFilter;
use crate::analysis::token::{IntoTokenStream, Token};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::{DEFAULT_RUSSIAN_STOP_WORDS_SET, StopFilter};
use crate::analysis::tokenizer::{AlphabeticTokenizer, Tokenizer};
use crate::error::Result;
use crate::morphology::MorphAnalyzer;

/// High-frequency copular and auxiliary verbs excluded in addition to the
/// base Russian list.
const LIGHT_VERB_STOP_WORDS: &[&str] = &["стать", "иметь", "быть", "являться"];

/// Text normalization context: tokenization, cleaning, stop-word removal,
/// and lemmatization behind one handle.
///
/// Everything inside is read-only after construction, so a single
/// `TextNormalizer` can be shared across threads.
pub struct TextNormalizer {
    tokenizer: AlphabeticTokenizer,
    clean_analyzer: PipelineAnalyzer,
    stop_filter: StopFilter,
    lemma_filter: LemmaFilter,
}

impl TextNormalizer {
    /// Create a normalizer with the default Russian stop-word set (the base
    /// list plus a few light verbs) and the given morphological analyzer.
    pub fn new(morphology: Arc<dyn MorphAnalyzer>) -> Result<Self> {
        let mut stop_words: HashSet<String> = DEFAULT_RUSSIAN_STOP_WORDS_SET.clone();
        stop_words.extend(LIGHT_VERB_STOP_WORDS.iter().map(|&s| s.to_string()));

        Self::with_stop_words(morphology, stop_words)
    }

    /// Create a normalizer with a custom stop-word set.
    ///
    /// The set should contain lowercase forms; comparison in
    /// [`remove_stop_words`](Self::remove_stop_words) is as-is.
    pub fn with_stop_words(
        morphology: Arc<dyn MorphAnalyzer>,
        stop_words: HashSet<String>,
    ) -> Result<Self> {
        let tokenizer = AlphabeticTokenizer::new()?;
        let clean_analyzer = PipelineAnalyzer::new(Arc::new(tokenizer.clone()))
            .add_char_filter(Arc::new(TagStripCharFilter::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("clean".to_string());

        Ok(TextNormalizer {
            tokenizer,
            clean_analyzer,
            stop_filter: StopFilter::with_stop_words(stop_words),
            lemma_filter: LemmaFilter::new(morphology),
        })
    }

    /// Extract alphabetic tokens from the text, case preserved, in order of
    /// first appearance. Duplicates are retained.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(tokens.map(|token| token.text).collect())
    }

    /// Strip markup tags, extract alphabetic tokens, and lowercase them.
    ///
    /// Tag removal is the non-nesting `<[^>]+>` pattern; a `>` inside an
    /// attribute value splits the tag early (documented limitation).
    pub fn clean(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.clean_analyzer.analyze(text)?;
        Ok(tokens.map(|token| token.text).collect())
    }

    /// Return the subsequence of tokens that are not stop words.
    ///
    /// Comparison is as-is, with no re-lowercasing: pass [`clean`](Self::clean)
    /// output for case-insensitive matching. Mixed-case input under-filters
    /// by design. Order is preserved and nothing is duplicated; applying
    /// this twice yields the same result.
    pub fn remove_stop_words(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| !self.stop_filter.is_stop_word(token.as_str()))
            .cloned()
            .collect()
    }

    /// Replace each token with its dictionary (normal) form.
    ///
    /// Each token is lowercased, parsed by the morphological analyzer, and
    /// replaced by the first (highest-confidence) parse's normal form; forms
    /// the analyzer does not recognize stay as their lowercased selves. The
    /// output always has exactly one lemma per input token, in input order.
    pub fn normalize(&self, tokens: &[String]) -> Result<Vec<String>> {
        let stream: Vec<Token> = tokens
            .iter()
            .enumerate()
            .map(|(position, text)| Token::new(text.clone(), position))
            .collect();

        let normalized = self.lemma_filter.filter(stream.into_token_stream())?;

        Ok(normalized.map(|token| token.text).collect())
    }

    /// Get the morphological analyzer used by this normalizer.
    pub fn morphology(&self) -> &Arc<dyn MorphAnalyzer> {
        self.lemma_filter.morphology()
    }

    /// Get the stop-word set used by this normalizer.
    pub fn stop_words(&self) -> &Arc<HashSet<String>> {
        self.stop_filter.stop_words()
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("tokenizer", &self.tokenizer.name())
            .field("stop_words", &self.stop_filter.len())
            .field("morphology", &self.morphology().name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::DictionaryMorphology;

    fn test_normalizer() -> TextNormalizer {
        let morphology = Arc::new(DictionaryMorphology::from_pairs(vec![
            ("коты", "кот"),
            ("бежали", "бежать"),
        ]));
        TextNormalizer::new(morphology).unwrap()
    }

    #[test]
    fn test_tokenize_preserves_case() {
        let normalizer = test_normalizer();
        let tokens = normalizer.tokenize("Hello123 world!").unwrap();
        assert_eq!(tokens, vec!["Hello", "world"]);
    }

    #[test]
    fn test_clean_strips_and_lowercases() {
        let normalizer = test_normalizer();
        let tokens = normalizer.clean("<b>Привет, мир!</b>").unwrap();
        assert_eq!(tokens, vec!["привет", "мир"]);
    }

    #[test]
    fn test_remove_stop_words() {
        let normalizer = test_normalizer();
        let tokens: Vec<String> = ["я", "иду", "домой"].iter().map(|s| s.to_string()).collect();
        assert_eq!(normalizer.remove_stop_words(&tokens), vec!["иду", "домой"]);
    }

    #[test]
    fn test_light_verbs_are_stop_words() {
        let normalizer = test_normalizer();
        let tokens: Vec<String> = ["стать", "иметь", "быть", "являться", "жить"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(normalizer.remove_stop_words(&tokens), vec!["жить"]);
    }

    #[test]
    fn test_normalize() {
        let normalizer = test_normalizer();
        let tokens: Vec<String> = ["коты", "бежали"].iter().map(|s| s.to_string()).collect();
        assert_eq!(normalizer.normalize(&tokens).unwrap(), vec!["кот", "бежать"]);
    }

    #[test]
    fn test_custom_stop_words() {
        let morphology = Arc::new(DictionaryMorphology::from_pairs(vec![("коты", "кот")]));
        let stop_words: HashSet<String> = ["домой"].iter().map(|s| s.to_string()).collect();
        let normalizer = TextNormalizer::with_stop_words(morphology, stop_words).unwrap();

        let tokens: Vec<String> = ["я", "иду", "домой"].iter().map(|s| s.to_string()).collect();
        // Only the custom set applies: "я" survives.
        assert_eq!(normalizer.remove_stop_words(&tokens), vec!["я", "иду"]);
    }

    #[test]
    fn test_stop_filter_and_normalizer_agree() {
        let normalizer = test_normalizer();
        let stop_filter = StopFilter::with_stop_words(normalizer.stop_words().as_ref().clone());

        let tokens = vec![Token::new("я", 0), Token::new("домой", 1)];
        let filtered: Vec<Token> = stop_filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "домой");
    }
}
