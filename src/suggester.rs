//! The suggestion pipeline: vocabulary, cached word vectors and ranking.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::config::SuggesterConfig;
use crate::error::Result;
use crate::ngram::NGramExtractor;
use crate::similarity::{SimilarityRanker, Suggestion};
use crate::vector::{VectorEncoder, WordVector};
use crate::vocabulary::{Vocabulary, VocabularyBuilder, VocabularyStats};

/// Number of n-grams listed in [`VocabularyStats::top_ngrams`].
const TOP_NGRAMS: usize = 10;

/// Suggests training words similar to a query word.
///
/// All state is built in [`Suggester::new`] and read-only afterwards, so a
/// suggester can be shared across threads and queried concurrently.
///
/// # Examples
///
/// ```
/// use ngram_suggest::config::SuggesterConfig;
/// use ngram_suggest::suggester::Suggester;
///
/// let config = SuggesterConfig::default().with_ngram_sizes(vec![3, 4]);
/// let suggester = Suggester::new(&["blue", "glue", "true", "tooth"], config).unwrap();
///
/// let suggestions = suggester.suggest("blue");
/// assert_eq!(suggestions[0].word, "blue");
/// ```
#[derive(Debug, Clone)]
pub struct Suggester {
    config: SuggesterConfig,
    encoder: VectorEncoder,
    ranker: SimilarityRanker,
    /// Training words with their cached vectors, in training order.
    entries: Vec<(String, WordVector)>,
    /// Training word -> index into `entries`.
    index: AHashMap<String, usize>,
}

impl Suggester {
    /// Build the pipeline over `words`.
    ///
    /// Words are used in the order given; a repeated word is kept once, at
    /// its first position.
    pub fn new<S: AsRef<str>>(words: &[S], config: SuggesterConfig) -> Result<Self> {
        config.validate()?;
        let extractor = NGramExtractor::new(config.ngram_sizes.clone())?;

        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut training: Vec<(String, Vec<String>)> = Vec::with_capacity(words.len());
        for word in words {
            let word: &str = word.as_ref();
            if seen.insert(word) {
                training.push((word.to_string(), extractor.extract(word)));
            }
        }

        if training.len() < words.len() {
            log::debug!(
                "Dropped {} repeated training words",
                words.len() - training.len()
            );
        }

        let vocabulary =
            VocabularyBuilder::from_sequences(training.iter().map(|(_, grams)| grams.as_slice()));
        log::info!(
            "Vocabulary built from {} words: {} dimensions",
            training.len(),
            vocabulary.dimension()
        );

        let encoder = VectorEncoder::new(Arc::new(vocabulary), extractor);
        let entries: Vec<(String, WordVector)> = training
            .into_iter()
            .map(|(word, grams)| {
                let vector = encoder.encode(&grams);
                (word, vector)
            })
            .collect();

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (word, _))| (word.clone(), i))
            .collect();

        Ok(Suggester {
            ranker: SimilarityRanker::new(config.max_suggestions),
            config,
            encoder,
            entries,
            index,
        })
    }

    /// The configuration the suggester was built with.
    pub fn config(&self) -> &SuggesterConfig {
        &self.config
    }

    /// The shared vocabulary.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        self.encoder.vocabulary()
    }

    /// Training words in ranking tie-break order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    /// Number of distinct training words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the training set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `word` is part of the training set.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The vector of `word`: cached for training words, encoded on demand
    /// otherwise.
    pub fn vector_of(&self, word: &str) -> WordVector {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1.clone(),
            None => self.encoder.encode_word(word),
        }
    }

    /// Ranked suggestions for `query`.
    ///
    /// The query is used as given; no trimming or case folding is applied.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let suggestions = match self.index.get(query) {
            Some(&i) => self.ranker.rank(&self.entries[i].1, &self.entries),
            None => {
                let vector = self.encoder.encode_word(query);
                if vector.is_zero() {
                    log::debug!("Query {query:?} shares no n-grams with the vocabulary");
                }
                self.ranker.rank(&vector, &self.entries)
            }
        };

        log::debug!(
            "Query {query:?} produced {} suggestions",
            suggestions.len()
        );
        suggestions
    }

    /// Summary of the vocabulary for display.
    pub fn stats(&self) -> VocabularyStats {
        let vocabulary = self.vocabulary();
        VocabularyStats {
            training_words: self.entries.len(),
            dimension: vocabulary.dimension(),
            total_occurrences: vocabulary.total_occurrences(),
            top_ngrams: vocabulary.most_frequent(TOP_NGRAMS),
        }
    }
}
