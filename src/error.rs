//! Error types for the morfema library.
//!
//! All fallible operations in morfema return [`Result`], whose error type is
//! the [`MorfemaError`] enum. Most of the library is pure computation that
//! cannot fail once constructed; the failure paths that do exist are
//! construction-time ones (regex compilation, dictionary loading).
//!
//! # Examples
//!
//! ```
//! use morfema::error::{MorfemaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MorfemaError::analysis("invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for morfema operations.
#[derive(Error, Debug)]
pub enum MorfemaError {
    /// I/O errors (dictionary files, word lists)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, pattern compilation)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Morphology-related errors (dictionary loading, analyzer construction)
    #[error("Morphology error: {0}")]
    Morphology(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with MorfemaError.
pub type Result<T> = std::result::Result<T, MorfemaError>;

impl MorfemaError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MorfemaError::Analysis(msg.into())
    }

    /// Create a new morphology error.
    pub fn morphology<S: Into<String>>(msg: S) -> Self {
        MorfemaError::Morphology(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MorfemaError::analysis("bad pattern");
        assert_eq!(format!("{err}"), "Analysis error: bad pattern");

        let err = MorfemaError::morphology("missing dictionary");
        assert_eq!(format!("{err}"), "Morphology error: missing dictionary");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: MorfemaError = io_err.into();
        assert!(matches!(err, MorfemaError::Io(_)));
    }
}
