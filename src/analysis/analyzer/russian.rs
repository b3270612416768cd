//! Russian-optimized analyzer.
//!
//! The default pipeline strips markup tags, extracts alphabetic tokens, and
//! lowercases them. Variants add stop-word removal and dictionary
//! lemmatization on top.

use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::char_filter::TagStripCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
use crate::error::Result;
use crate::morphology::MorphAnalyzer;

/// An analyzer tuned for Russian (and mixed Russian/Latin) text.
pub struct RussianAnalyzer {
    inner: PipelineAnalyzer,
}

impl RussianAnalyzer {
    /// Create the cleaning pipeline: tag stripping, alphabetic tokenization,
    /// lowercasing. No stop-word removal, no lemmatization.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(AlphabeticTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(TagStripCharFilter::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("russian".to_string());

        Ok(Self { inner: analyzer })
    }

    /// Create the cleaning pipeline with default Russian stop-word removal.
    pub fn with_stop_words() -> Result<Self> {
        let tokenizer = Arc::new(AlphabeticTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(TagStripCharFilter::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::russian()))
            .with_name("russian_stop".to_string());

        Ok(Self { inner: analyzer })
    }

    /// Create the full pipeline: cleaning, default Russian stop-word removal,
    /// and lemmatization through the given morphological analyzer.
    pub fn with_morphology(morphology: Arc<dyn MorphAnalyzer>) -> Result<Self> {
        let tokenizer = Arc::new(AlphabeticTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(TagStripCharFilter::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::russian()))
            .add_filter(Arc::new(LemmaFilter::new(morphology)))
            .with_name("russian_morph".to_string());

        Ok(Self { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for RussianAnalyzer {
    fn default() -> Self {
        Self::new().expect("Russian analyzer should be creatable with default settings")
    }
}

impl Analyzer for RussianAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "russian"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Debug for RussianAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RussianAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::morphology::DictionaryMorphology;

    #[test]
    fn test_russian_analyzer_cleans() {
        let analyzer = RussianAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("<b>Привет, мир!</b>").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "привет");
        assert_eq!(tokens[1].text, "мир");
    }

    #[test]
    fn test_russian_analyzer_keeps_stop_words() {
        let analyzer = RussianAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("я иду домой").unwrap().collect();

        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_russian_analyzer_with_stop_words() {
        let analyzer = RussianAnalyzer::with_stop_words().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("Я иду домой").unwrap().collect();

        // "я" is lowercased first, then removed as a stop word
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "иду");
        assert_eq!(tokens[1].text, "домой");
    }

    #[test]
    fn test_russian_analyzer_with_morphology() {
        let morphology = Arc::new(DictionaryMorphology::from_pairs(vec![
            ("коты", "кот"),
            ("бежали", "бежать"),
        ]));
        let analyzer = RussianAnalyzer::with_morphology(morphology).unwrap();

        let tokens: Vec<Token> = analyzer.analyze("Коты бежали!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "кот");
        assert_eq!(tokens[1].text, "бежать");
    }

    #[test]
    fn test_russian_analyzer_name() {
        let analyzer = RussianAnalyzer::new().unwrap();

        assert_eq!(analyzer.name(), "russian");
    }
}
