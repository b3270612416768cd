//! Alphabetic tokenizer implementation.
//!
//! Extracts maximal runs of alphabetic characters from two accepted ranges:
//! the Cyrillic alphabet (including `Ё`/`ё`) and the basic Latin alphabet.
//! Everything else (digits, punctuation, whitespace, symbols) acts purely
//! as a separator and is dropped.
//!
//! # Examples
//!
//! ```
//! use morfema::analysis::tokenizer::Tokenizer;
//! use morfema::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
//!
//! let tokenizer = AlphabeticTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello123 world!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{MorfemaError, Result};

/// Default pattern: maximal runs from the Cyrillic and Latin alphabet ranges.
const DEFAULT_TOKEN_PATTERN: &str = r"[А-Яа-яЁёA-Za-z]+";

/// A tokenizer that extracts alphabetic tokens using a compiled regex.
///
/// Case and left-to-right order are preserved; empty input yields an empty
/// stream. Any input string is valid: there are no error conditions at
/// tokenization time.
#[derive(Clone, Debug)]
pub struct AlphabeticTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl AlphabeticTokenizer {
    /// Create a new tokenizer with the default alphabetic pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_TOKEN_PATTERN)
    }

    /// Create a new tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| MorfemaError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(AlphabeticTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for AlphabeticTokenizer {
    fn default() -> Self {
        Self::new().expect("Default token pattern should be valid")
    }
}

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
