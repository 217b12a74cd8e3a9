//! Dictionary loading and training set selection.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::config::SuggesterConfig;
use crate::error::{Result, SuggestError};

/// Raw dictionary entries, one per line, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    /// Load a dictionary with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);

        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        log::debug!("Read {} lines from {}", lines.len(), path.display());

        Ok(Corpus { lines })
    }

    /// Build a corpus from in-memory lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Corpus {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The raw lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of raw lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the corpus has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Filter, sample and sort the corpus into a training set.
    ///
    /// With `strict_sample` set, a corpus with fewer usable words than
    /// `sample_size` is an error instead of being used whole.
    pub fn training_set(&self, config: &SuggesterConfig) -> Result<Vec<String>> {
        let words = filter_words(&self.lines, config.min_word_length);
        if config.strict_sample && words.len() < config.sample_size {
            return Err(SuggestError::corpus(format!(
                "sample of {} words requested but only {} words have at least {} characters",
                config.sample_size,
                words.len(),
                config.min_word_length
            )));
        }
        Ok(sample_words(words, config.sample_size, config.seed))
    }
}

/// Trim every line and keep those with at least `min_length` characters.
pub fn filter_words<S: AsRef<str>>(lines: &[S], min_length: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|word| word.chars().count() >= min_length)
        .map(str::to_string)
        .collect()
}

/// Draw `sample_size` words without replacement and sort them.
///
/// When fewer words are available, all of them are used. A `seed` makes the
/// sample reproducible.
pub fn sample_words(words: Vec<String>, sample_size: usize, seed: Option<u64>) -> Vec<String> {
    let mut sampled = match seed {
        Some(seed) => sample_with(&mut StdRng::seed_from_u64(seed), words, sample_size),
        None => sample_with(&mut rand::rng(), words, sample_size),
    };
    sampled.sort();
    sampled
}

fn sample_with<R: Rng + ?Sized>(rng: &mut R, words: Vec<String>, sample_size: usize) -> Vec<String> {
    if words.len() <= sample_size {
        if words.len() < sample_size {
            log::warn!(
                "Requested a sample of {} words but only {} are available; using all",
                sample_size,
                words.len()
            );
        }
        return words;
    }

    let mut picked: Vec<usize> = index::sample(rng, words.len(), sample_size).into_vec();
    picked.sort_unstable();

    let mut words: Vec<Option<String>> = words.into_iter().map(Some).collect();
    picked
        .into_iter()
        .filter_map(|i| words[i].take())
        .collect()
}
