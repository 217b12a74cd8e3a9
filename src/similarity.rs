//! Cosine similarity and suggestion ranking.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vector::WordVector;

/// Training sets smaller than this are scored sequentially.
const PARALLEL_THRESHOLD: usize = 100;

/// A suggested word with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested training word.
    pub word: String,
    /// Cosine similarity in `(0.0, 1.0]`.
    pub score: f64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, score: f64) -> Self {
        Suggestion { word, score }
    }
}

/// Dot product over the shared prefix of `a` and `b`.
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Cosine similarity of two vectors.
///
/// Returns exactly 0.0 when either vector has zero norm. The result is
/// clamped to `[0.0, 1.0]`; entries are never negative.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_sq_a: f64 = a.iter().map(|x| x * x).sum();
    let norm_sq_b: f64 = b.iter().map(|x| x * x).sum();

    if norm_sq_a == 0.0 || norm_sq_b == 0.0 {
        return 0.0;
    }

    // One sqrt of the product keeps cos(v, v) at exactly 1.0 for integer weights
    let similarity = dot_product(a, b) / (norm_sq_a * norm_sq_b).sqrt();
    similarity.clamp(0.0, 1.0)
}

/// Ranks training words against a query vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityRanker {
    max_suggestions: usize,
}

impl SimilarityRanker {
    /// Create a ranker returning at most `max_suggestions` entries.
    pub fn new(max_suggestions: usize) -> Self {
        SimilarityRanker { max_suggestions }
    }

    /// Maximum number of suggestions returned.
    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Score every candidate against `query`, in candidate order.
    pub fn score_all<'a>(
        &self,
        query: &WordVector,
        candidates: &'a [(String, WordVector)],
    ) -> Vec<(&'a str, f64)> {
        let score = |(word, vector): &'a (String, WordVector)| {
            (
                word.as_str(),
                cosine_similarity(vector.as_slice(), query.as_slice()),
            )
        };

        if candidates.len() < PARALLEL_THRESHOLD {
            candidates.iter().map(score).collect()
        } else {
            candidates.par_iter().map(score).collect()
        }
    }

    /// Rank candidates by descending similarity to `query`.
    ///
    /// Ties keep candidate order. The list is cut to the configured size
    /// first, then entries scoring 0.0 or less are dropped.
    pub fn rank(&self, query: &WordVector, candidates: &[(String, WordVector)]) -> Vec<Suggestion> {
        let mut scored = self.score_all(query, candidates);

        // Stable sort, so ties stay in candidate order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(self.max_suggestions);

        scored
            .into_iter()
            .filter(|&(_, score)| score > 0.0)
            .map(|(word, score)| Suggestion::new(word.to_string(), score))
            .collect()
    }
}
