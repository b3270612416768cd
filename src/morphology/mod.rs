//! Morphological analysis interface.
//!
//! Lemmatization is delegated to a morphological analyzer: a component that,
//! given an inflected word form, returns ranked candidate analyses, each
//! carrying a normal (dictionary) form. The pipeline depends only on that
//! contract, [`MorphAnalyzer`], so analyzers and language packs can be
//! substituted freely. Ranking, including tie-breaks, belongs entirely to the
//! analyzer; the pipeline always takes the first parse.
//!
//! [`DictionaryMorphology`] is the built-in implementation: an exact-match
//! form-to-lemmas dictionary, constructed in memory or loaded from a JSON
//! file.
//!
//! # Examples
//!
//! ```
//! use morfema::morphology::{DictionaryMorphology, MorphAnalyzer};
//!
//! let morph = DictionaryMorphology::from_pairs(vec![("коты", "кот")]);
//! let parses = morph.parse("коты");
//!
//! assert_eq!(parses[0].normal_form, "кот");
//! ```

use serde::{Deserialize, Serialize};

pub mod dictionary;

pub use dictionary::DictionaryMorphology;

/// A single candidate analysis of a word form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parse {
    /// The normal (dictionary) form of the word.
    pub normal_form: String,

    /// The analyzer's confidence in this analysis, higher is better.
    pub score: f32,
}

impl Parse {
    /// Create a new parse.
    pub fn new<S: Into<String>>(normal_form: S, score: f32) -> Self {
        Parse {
            normal_form: normal_form.into(),
            score,
        }
    }
}

/// Trait for morphological analyzers.
///
/// Implementations map a word form to a ranked list of candidate analyses,
/// best first. An empty result means the analyzer does not recognize the
/// form; callers are expected to fall back to the input form itself.
///
/// Analyzers must be safe for concurrent read-only use (`Send + Sync`); the
/// pipeline adds no synchronization of its own.
pub trait MorphAnalyzer: Send + Sync {
    /// Parse a word form into ranked candidate analyses, best first.
    fn parse(&self, word: &str) -> Vec<Parse>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
