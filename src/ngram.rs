//! Character n-gram extraction.

use crate::error::{Result, SuggestError};

/// Splits words into contiguous character n-grams of several sizes.
///
/// N-grams are taken over `char`s, so multi-byte characters count as one
/// position. No case folding or other normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGramExtractor {
    sizes: Vec<usize>,
}

impl NGramExtractor {
    /// Create an extractor for the given sizes.
    ///
    /// Sizes are used in the order given; an empty list or a zero size is
    /// rejected.
    pub fn new(sizes: Vec<usize>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(SuggestError::invalid_config("n-gram sizes must not be empty"));
        }
        if sizes.contains(&0) {
            return Err(SuggestError::invalid_config("n-gram size must be positive"));
        }
        Ok(NGramExtractor { sizes })
    }

    /// The configured sizes.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Extract all n-grams of `word`, size by size, left to right.
    ///
    /// Duplicates are preserved. Sizes longer than the word contribute
    /// nothing.
    pub fn extract(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let capacity = self
            .sizes
            .iter()
            .map(|&k| (chars.len() + 1).saturating_sub(k))
            .sum();

        let mut grams = Vec::with_capacity(capacity);
        for &size in &self.sizes {
            grams.extend(ngrams_of(&chars, size));
        }
        grams
    }
}

/// All contiguous windows of `size` characters, left to right.
pub fn ngrams_of(chars: &[char], size: usize) -> Vec<String> {
    if size == 0 {
        return Vec::new();
    }
    chars
        .windows(size)
        .map(|window| window.iter().collect())
        .collect()
}
