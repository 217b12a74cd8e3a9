//! Shared n-gram vocabulary: position index and frequency table.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::ngram::NGramExtractor;

/// The distinct n-grams of a training set.
///
/// Positions follow the lexicographic order of the n-gram strings, so the
/// dimension order of every vector derived from the vocabulary is fixed for
/// a given training set. Frequencies count every occurrence of an n-gram
/// across all training words, including repeats inside a single word.
///
/// A vocabulary is never mutated after it is built.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Distinct n-grams in position order.
    ngrams: Vec<String>,
    /// N-gram -> position in `[0, dimension)`.
    positions: AHashMap<String, usize>,
    /// N-gram -> corpus-wide occurrence count.
    frequencies: AHashMap<String, u32>,
    /// Sum of all frequencies.
    total_occurrences: u64,
}

impl Vocabulary {
    /// Position of `ngram`, if it is part of the vocabulary.
    pub fn position_of(&self, ngram: &str) -> Option<usize> {
        self.positions.get(ngram).copied()
    }

    /// Corpus-wide frequency of `ngram` (0 when unknown).
    pub fn frequency_of(&self, ngram: &str) -> u32 {
        self.frequencies.get(ngram).copied().unwrap_or(0)
    }

    /// The n-gram stored at `position`.
    pub fn ngram_at(&self, position: usize) -> Option<&str> {
        self.ngrams.get(position).map(|s| s.as_str())
    }

    /// Number of distinct n-grams, the length of every word vector.
    pub fn dimension(&self) -> usize {
        self.ngrams.len()
    }

    /// Whether the training set produced no n-grams at all.
    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }

    /// Total number of n-gram occurrences counted.
    pub fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    /// Distinct n-grams in position order.
    pub fn ngrams(&self) -> &[String] {
        &self.ngrams
    }

    /// The `limit` most frequent n-grams, ties broken by position.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self
            .ngrams
            .iter()
            .map(|gram| (gram.clone(), self.frequency_of(gram)))
            .collect();

        // Stable: equal frequencies keep lexicographic order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        entries
    }
}

/// Builds a [`Vocabulary`] from training words.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    extractor: NGramExtractor,
}

impl VocabularyBuilder {
    /// Create a builder that extracts n-grams with `extractor`.
    pub fn new(extractor: NGramExtractor) -> Self {
        VocabularyBuilder { extractor }
    }

    /// The extractor used by this builder.
    pub fn extractor(&self) -> &NGramExtractor {
        &self.extractor
    }

    /// Extract every word's n-grams and build the vocabulary over them.
    pub fn build<S: AsRef<str>>(&self, words: &[S]) -> Vocabulary {
        let sequences: Vec<Vec<String>> = words
            .iter()
            .map(|word| self.extractor.extract(word.as_ref()))
            .collect();

        Self::from_sequences(sequences.iter().map(Vec::as_slice))
    }

    /// Build a vocabulary from already extracted n-gram sequences.
    pub fn from_sequences<'a, I>(sequences: I) -> Vocabulary
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut frequencies: AHashMap<String, u32> = AHashMap::new();
        let mut total_occurrences = 0u64;

        for sequence in sequences {
            for gram in sequence {
                *frequencies.entry(gram.clone()).or_insert(0) += 1;
                total_occurrences += 1;
            }
        }

        let mut ngrams: Vec<String> = frequencies.keys().cloned().collect();
        ngrams.sort();

        let positions: AHashMap<String, usize> = ngrams
            .iter()
            .enumerate()
            .map(|(position, gram)| (gram.clone(), position))
            .collect();

        if ngrams.is_empty() {
            log::warn!("Vocabulary is empty; every query will produce no suggestions");
        } else {
            log::debug!(
                "Built vocabulary with {} distinct n-grams from {} occurrences",
                ngrams.len(),
                total_occurrences
            );
        }

        Vocabulary {
            ngrams,
            positions,
            frequencies,
            total_occurrences,
        }
    }
}

/// Summary figures about a built vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyStats {
    /// Number of distinct training words.
    pub training_words: usize,
    /// Number of distinct n-grams.
    pub dimension: usize,
    /// Total n-gram occurrences across the training set.
    pub total_occurrences: u64,
    /// Most frequent n-grams with their counts.
    pub top_ngrams: Vec<(String, u32)>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn builder(sizes: Vec<usize>) -> VocabularyBuilder {
        VocabularyBuilder::new(NGramExtractor::new(sizes).unwrap())
    }

    #[test]
    fn test_positions_are_sorted_bijection() {
        let vocabulary = builder(vec![3, 4]).build(&["blue", "glue", "true", "tooth"]);

        let positions: HashSet<usize> = vocabulary
            .ngrams()
            .iter()
            .map(|gram| vocabulary.position_of(gram).unwrap())
            .collect();
        let expected: HashSet<usize> = (0..vocabulary.dimension()).collect();
        assert_eq!(positions, expected);

        let mut sorted = vocabulary.ngrams().to_vec();
        sorted.sort();
        assert_eq!(sorted, vocabulary.ngrams());

        for (position, gram) in vocabulary.ngrams().iter().enumerate() {
            assert_eq!(vocabulary.ngram_at(position), Some(gram.as_str()));
        }
    }

    #[test]
    fn test_frequencies_count_occurrences() {
        let vocabulary = builder(vec![3, 4]).build(&["blue", "glue", "true", "tooth"]);

        // "lue" in blue and glue, "rue" only in true
        assert_eq!(vocabulary.frequency_of("lue"), 2);
        assert_eq!(vocabulary.frequency_of("rue"), 1);
        assert_eq!(vocabulary.frequency_of("zzz"), 0);
        assert_eq!(vocabulary.position_of("zzz"), None);
    }

    #[test]
    fn test_repeated_ngram_in_one_word_counts_twice() {
        let vocabulary = builder(vec![3]).build(&["abcabc"]);
        assert_eq!(vocabulary.frequency_of("abc"), 2);
        assert_eq!(vocabulary.frequency_of("bca"), 1);
        assert_eq!(vocabulary.dimension(), 3);
        assert_eq!(vocabulary.total_occurrences(), 4);
    }

    #[test]
    fn test_empty_training_set() {
        let words: Vec<String> = Vec::new();
        let vocabulary = builder(vec![3, 4, 5]).build(&words);
        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary.dimension(), 0);
        assert_eq!(vocabulary.total_occurrences(), 0);
    }

    #[test]
    fn test_most_frequent() {
        let vocabulary = builder(vec![3]).build(&["blue", "glue", "clue"]);
        let top = vocabulary.most_frequent(1);
        assert_eq!(top, vec![("lue".to_string(), 3)]);
    }
}
