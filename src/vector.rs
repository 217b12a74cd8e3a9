//! Word vectors over a shared n-gram vocabulary.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ngram::NGramExtractor;
use crate::vocabulary::Vocabulary;

/// A dense vector with one entry per vocabulary n-gram.
///
/// An entry holds the n-gram's corpus-wide frequency when the word
/// contains that n-gram and 0 otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordVector {
    data: Vec<f64>,
}

impl WordVector {
    /// Wrap raw values.
    pub fn new(data: Vec<f64>) -> Self {
        WordVector { data }
    }

    /// A vector of `dimension` zeros.
    pub fn zeros(dimension: usize) -> Self {
        WordVector {
            data: vec![0.0; dimension],
        }
    }

    /// Number of entries.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// The raw values.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Sum of squared entries.
    pub fn norm_squared(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Whether every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// Number of non-zero entries.
    pub fn non_zero_count(&self) -> usize {
        self.data.iter().filter(|&&x| x != 0.0).count()
    }
}

/// Maps n-gram sequences to [`WordVector`]s using a vocabulary.
#[derive(Debug, Clone)]
pub struct VectorEncoder {
    vocabulary: Arc<Vocabulary>,
    extractor: NGramExtractor,
}

impl VectorEncoder {
    /// Create an encoder over `vocabulary`. `extractor` is used for words
    /// whose n-grams have not been extracted yet.
    pub fn new(vocabulary: Arc<Vocabulary>, extractor: NGramExtractor) -> Self {
        VectorEncoder {
            vocabulary,
            extractor,
        }
    }

    /// The vocabulary the encoder writes against.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Encode an n-gram sequence.
    ///
    /// Known n-grams set their position to the n-gram's frequency; repeats
    /// overwrite with the same value. Unknown n-grams are skipped.
    pub fn encode<S: AsRef<str>>(&self, ngrams: &[S]) -> WordVector {
        let mut vector = WordVector::zeros(self.vocabulary.dimension());
        for gram in ngrams {
            let gram = gram.as_ref();
            if let Some(position) = self.vocabulary.position_of(gram) {
                vector.data[position] = self.vocabulary.frequency_of(gram) as f64;
            }
        }
        vector
    }

    /// Extract the n-grams of `word` and encode them.
    pub fn encode_word(&self, word: &str) -> WordVector {
        self.encode(&self.extractor.extract(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::VocabularyBuilder;

    fn encoder(words: &[&str], sizes: Vec<usize>) -> VectorEncoder {
        let extractor = NGramExtractor::new(sizes).unwrap();
        let vocabulary = VocabularyBuilder::new(extractor.clone()).build(words);
        VectorEncoder::new(Arc::new(vocabulary), extractor)
    }

    #[test]
    fn test_encode_uses_global_frequency() {
        let encoder = encoder(&["blue", "glue"], vec![3]);
        let vocabulary = encoder.vocabulary().clone();
        let vector = encoder.encode_word("blue");

        assert_eq!(vector.dimension(), vocabulary.dimension());
        let lue = vocabulary.position_of("lue").unwrap();
        let blu = vocabulary.position_of("blu").unwrap();
        let glu = vocabulary.position_of("glu").unwrap();
        assert_eq!(vector.as_slice()[lue], 2.0);
        assert_eq!(vector.as_slice()[blu], 1.0);
        assert_eq!(vector.as_slice()[glu], 0.0);
    }

    #[test]
    fn test_repeated_ngram_does_not_accumulate() {
        let encoder = encoder(&["abcabc"], vec![3]);
        let vector = encoder.encode_word("abcabc");
        let abc = encoder.vocabulary().position_of("abc").unwrap();
        assert_eq!(vector.as_slice()[abc], 2.0);
        assert_eq!(vector.non_zero_count(), 3);
    }

    #[test]
    fn test_out_of_vocabulary_is_dropped() {
        let encoder = encoder(&["blue"], vec![3, 4, 5]);
        let vector = encoder.encode_word("zzzzz");
        assert_eq!(vector.dimension(), encoder.vocabulary().dimension());
        assert!(vector.is_zero());
        assert_eq!(vector.norm(), 0.0);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let encoder = encoder(&["blue", "glue", "true", "tooth"], vec![3, 4]);
        let first = encoder.encode_word("bluetooth");
        let second = encoder.encode_word("bluetooth");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_vocabulary_gives_empty_vector() {
        let encoder = encoder(&[], vec![3]);
        let vector = encoder.encode_word("blue");
        assert_eq!(vector.dimension(), 0);
        assert!(vector.is_zero());
    }

    #[test]
    fn test_case_sensitive_vectors_differ() {
        let encoder = encoder(&["Blue", "blue"], vec![3]);
        assert_ne!(encoder.encode_word("Blue"), encoder.encode_word("blue"));
    }
}
