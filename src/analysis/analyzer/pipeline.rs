//! Pipeline analyzer that combines char filters, a tokenizer, and token filters.
//!
//! This is the main building block for custom analyzers. Processing order:
//!
//! 1. Char filters: rewrite the raw text (e.g. tag stripping)
//! 2. Tokenizer: split the filtered text into tokens
//! 3. Token filters: applied sequentially in the order they were added
//!
//! When char filters rewrite the text, token offsets are corrected back into
//! the original input using the transformations the filters report.
//!
//! # Examples
//!
//! ```
//! use morfema::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use morfema::analysis::char_filter::TagStripCharFilter;
//! use morfema::analysis::token_filter::{LowercaseFilter, StopFilter};
//! use morfema::analysis::tokenizer::AlphabeticTokenizer;
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(AlphabeticTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_char_filter(Arc::new(TagStripCharFilter::new().unwrap()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["и"])))
//!     .with_name("custom".to_string());
//!
//! let tokens: Vec<_> = analyzer.analyze("<b>Шум И ярость</b>").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "шум");
//! assert_eq!(tokens[1].text, "ярость");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::{CharFilter, Transformation};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with chains of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this analyzer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Get the token filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Map an offset in the filtered text back to the original text.
    ///
    /// Transformations are ordered by position and their `new_*` coordinates
    /// are in the filtered text's space.
    fn correct_offset(offset: usize, transformations: &[Transformation]) -> usize {
        let mut corrected = offset;
        for t in transformations {
            if offset >= t.new_end {
                // Past this transformation: compensate for the length change.
                let original_len = t.original_end - t.original_start;
                let new_len = t.new_end - t.new_start;
                corrected =
                    (corrected as isize - new_len as isize + original_len as isize) as usize;
            } else if offset >= t.new_start {
                // Inside the replacement range: interpolate.
                let new_len = t.new_end - t.new_start;
                if new_len == 0 {
                    return t.original_start;
                }
                let offset_in_new = offset - t.new_start;
                let original_len = t.original_end - t.original_start;
                return t.original_start + (offset_in_new * original_len) / new_len;
            }
            // Before this transformation: unaffected.
        }
        corrected
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        // Apply char filters
        let mut filtered_text = text.to_string();
        let mut filter_transformations = Vec::with_capacity(self.char_filters.len());

        for char_filter in &self.char_filters {
            let (new_text, transformations) = char_filter.filter(&filtered_text);
            filtered_text = new_text;
            filter_transformations.push(transformations);
        }

        // Tokenize
        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;

        // Apply token filters in sequence
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        // Map offsets back through the char filters, last applied first.
        if !self.char_filters.is_empty() {
            let collected: Vec<_> = tokens
                .map(|mut token| {
                    for transformations in filter_transformations.iter().rev() {
                        token.start_offset =
                            Self::correct_offset(token.start_offset, transformations);
                        token.end_offset = Self::correct_offset(token.end_offset, transformations);
                    }
                    token
                })
                .collect();
            return Ok(Box::new(collected.into_iter()));
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::TagStripCharFilter;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::LowercaseFilter;
    use crate::analysis::tokenizer::AlphabeticTokenizer;

    fn clean_pipeline() -> PipelineAnalyzer {
        let tokenizer = Arc::new(AlphabeticTokenizer::new().unwrap());
        PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(TagStripCharFilter::new().unwrap()))
            .add_filter(Arc::new(LowercaseFilter::new()))
    }

    #[test]
    fn test_pipeline_clean() {
        let analyzer = clean_pipeline();
        let tokens: Vec<Token> = analyzer.analyze("<b>Привет, мир!</b>").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "привет");
        assert_eq!(tokens[1].text, "мир");
    }

    #[test]
    fn test_offsets_corrected_into_original_text() {
        let analyzer = clean_pipeline();
        let input = "<b>Привет, мир!</b>";
        let tokens: Vec<Token> = analyzer.analyze(input).unwrap().collect();

        // Offsets point back into the raw markup text.
        assert_eq!(&input[tokens[0].start_offset..tokens[0].end_offset], "Привет");
        assert_eq!(&input[tokens[1].start_offset..tokens[1].end_offset], "мир");
    }

    #[test]
    fn test_pipeline_without_char_filters() {
        let tokenizer = Arc::new(AlphabeticTokenizer::new().unwrap());
        let analyzer =
            PipelineAnalyzer::new(tokenizer).add_filter(Arc::new(LowercaseFilter::new()));

        let tokens: Vec<Token> = analyzer.analyze("Снег Идёт").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "снег");
        assert_eq!(tokens[1].text, "идёт");
    }

    #[test]
    fn test_correct_offset_past_deletion() {
        // "<b>" deleted at origin: positions after it shift by 3.
        let transformations = vec![Transformation::new(0, 3, 0, 0)];
        assert_eq!(PipelineAnalyzer::correct_offset(0, &transformations), 3);
        assert_eq!(PipelineAnalyzer::correct_offset(5, &transformations), 8);
    }
}
