//! Command line argument parsing for the ngram-suggest CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::SuggesterConfig;
use crate::error::Result;

/// ngram-suggest - Suggest dictionary words by character n-gram similarity
#[derive(Parser, Debug, Clone)]
#[command(name = "ngram-suggest")]
#[command(about = "Suggest similar dictionary words using character n-gram cosine similarity")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SuggestArgs {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "NGRAM_SUGGEST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SuggestArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest similar words for one or more query words
    Suggest(SuggestCommandArgs),

    /// Read query words interactively
    Repl(ReplArgs),

    /// Show vocabulary statistics
    Stats(StatsArgs),
}

/// Options shared by every command that builds a vocabulary.
#[derive(Parser, Debug, Clone, Default)]
pub struct PipelineArgs {
    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Minimum training word length
    #[arg(long = "min-length")]
    pub min_length: Option<usize>,

    /// N-gram sizes, comma separated
    #[arg(long = "ngram-sizes", value_delimiter = ',')]
    pub ngram_sizes: Option<Vec<usize>>,

    /// Number of words sampled from the dictionary
    #[arg(long = "sample-size")]
    pub sample_size: Option<usize>,

    /// Seed for the training sample
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fail when the dictionary has fewer words than the sample size
    #[arg(long = "strict-sample")]
    pub strict_sample: bool,
}

impl PipelineArgs {
    /// Apply command line overrides to a base configuration.
    pub fn apply(&self, mut config: SuggesterConfig) -> Result<SuggesterConfig> {
        if let Some(min_length) = self.min_length {
            config.min_word_length = min_length;
        }
        if let Some(sizes) = &self.ngram_sizes {
            config.ngram_sizes = sizes.clone();
        }
        if let Some(sample_size) = self.sample_size {
            config.sample_size = sample_size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.strict_sample {
            config.strict_sample = true;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for one-shot suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestCommandArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Query words
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Maximum number of suggestions per word
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the interactive prompt
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Maximum number of suggestions per word
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for vocabulary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
