//! Configuration for the suggestion pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SuggestError};

/// Default minimum length (in characters) of a training word.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Default n-gram sizes extracted from every word.
pub const DEFAULT_NGRAM_SIZES: [usize; 3] = [3, 4, 5];

/// Default number of suggestions returned per query.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Default number of words sampled from the dictionary for training.
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Tunable parameters of the suggestion pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggesterConfig {
    /// Words shorter than this (after trimming) are not used for training.
    pub min_word_length: usize,
    /// N-gram sizes, extracted in the order given.
    pub ngram_sizes: Vec<usize>,
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Number of dictionary words sampled into the training set.
    pub sample_size: usize,
    /// Seed for the training sample. `None` draws a fresh sample every run.
    pub seed: Option<u64>,
    /// Reject dictionaries with fewer usable words than `sample_size`
    /// instead of training on all of them.
    pub strict_sample: bool,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        SuggesterConfig {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            ngram_sizes: DEFAULT_NGRAM_SIZES.to_vec(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
            strict_sample: false,
        }
    }
}

impl SuggesterConfig {
    /// Load a configuration from a JSON file. Missing fields use defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SuggesterConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the n-gram sizes.
    pub fn with_ngram_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.ngram_sizes = sizes;
        self
    }

    /// Set the maximum number of suggestions.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Set the minimum training word length.
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Set the training sample size.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Fix the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fail instead of falling back when the sample cannot be filled.
    pub fn with_strict_sample(mut self, strict: bool) -> Self {
        self.strict_sample = strict;
        self
    }

    /// Check the configuration for values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.ngram_sizes.is_empty() {
            return Err(SuggestError::invalid_config("ngram_sizes must not be empty"));
        }
        if self.ngram_sizes.contains(&0) {
            return Err(SuggestError::invalid_config(
                "ngram_sizes must not contain 0",
            ));
        }
        if self.min_word_length == 0 {
            return Err(SuggestError::invalid_config(
                "min_word_length must be at least 1",
            ));
        }
        Ok(())
    }
}
