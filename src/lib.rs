//! # ngram-suggest
//!
//! Suggests dictionary words similar to a query word by comparing
//! character n-gram profiles with cosine similarity.
//!
//! ## Pipeline
//!
//! - [`ngram::NGramExtractor`] splits words into n-grams of several sizes
//! - [`vocabulary::VocabularyBuilder`] fixes the dimension order and counts
//!   corpus-wide n-gram frequencies
//! - [`vector::VectorEncoder`] turns a word into a frequency-weighted vector
//! - [`similarity::SimilarityRanker`] ranks training words by cosine
//!   similarity to the query
//!
//! [`suggester::Suggester`] wires these together over a training set.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod ngram;
pub mod similarity;
pub mod suggester;
pub mod vector;
pub mod vocabulary;

pub mod prelude {
    pub use crate::config::SuggesterConfig;
    pub use crate::error::{Result, SuggestError};
    pub use crate::similarity::Suggestion;
    pub use crate::suggester::Suggester;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
