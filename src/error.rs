//! Error types for the n-gram suggestion library.
//!
//! All fallible operations return [`SuggestError`]. The ranking core itself
//! only fails on invalid configuration; empty vocabularies, out-of-vocabulary
//! queries and zero vectors are recovered locally and show up as shorter
//! (possibly empty) suggestion lists.
//!
//! # Examples
//!
//! ```
//! use ngram_suggest::error::{SuggestError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SuggestError::invalid_config("ngram_sizes must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for suggestion operations.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// I/O errors (reading dictionaries, configuration files, console)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Corpus loading or sampling errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SuggestError.
pub type Result<T> = std::result::Result<T, SuggestError>;

impl SuggestError {
    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SuggestError::InvalidConfig(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SuggestError::Corpus(msg.into())
    }
}
