//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis in morfema. Analyzers combine char filters, a tokenizer, and
//! token filters to transform raw text into a token stream:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Available Implementations
//!
//! - [`SimpleAnalyzer`](super::simple::SimpleAnalyzer) - Tokenization only, no filtering
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`RussianAnalyzer`](super::russian::RussianAnalyzer) - Russian-optimized defaults
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use morfema::analysis::analyzer::Analyzer;
//! use morfema::analysis::token::TokenStream;
//! use morfema::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         // Custom analysis logic here
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so analyzers can be shared across thread
/// boundaries for concurrent read-only use.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;
}
