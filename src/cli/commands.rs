//! Command implementations for the ngram-suggest CLI.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SuggesterConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::suggester::Suggester;

/// Input that ends the interactive prompt.
const QUIT_COMMAND: &str = ":q";

/// Execute a CLI command.
pub fn execute_command(args: SuggestArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &args),
        Command::Repl(repl_args) => run_interactive(repl_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Load the base configuration: the config file if given, defaults otherwise.
fn base_config(cli_args: &SuggestArgs) -> Result<SuggesterConfig> {
    match &cli_args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            SuggesterConfig::from_file(path)
        }
        None => Ok(SuggesterConfig::default()),
    }
}

/// Read the dictionary, sample the training set and build a suggester.
pub fn build_suggester(config: SuggesterConfig, pipeline: &PipelineArgs) -> Result<Suggester> {
    let start_time = Instant::now();

    let corpus = Corpus::load_from_file(&pipeline.dictionary)?;
    let training = corpus.training_set(&config)?;
    log::info!(
        "Sampled {} training words from {} dictionary lines",
        training.len(),
        corpus.len()
    );

    let suggester = Suggester::new(&training, config)?;
    log::info!(
        "Suggester ready in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(suggester)
}

fn configured(
    pipeline: &PipelineArgs,
    limit: Option<usize>,
    cli_args: &SuggestArgs,
) -> Result<SuggesterConfig> {
    let mut config = pipeline.apply(base_config(cli_args)?)?;
    if let Some(limit) = limit {
        config.max_suggestions = limit;
    }
    Ok(config)
}

/// Rank one query and time it.
fn query(suggester: &Suggester, word: &str) -> SuggestionResults {
    let start_time = Instant::now();
    let suggestions = suggester.suggest(word);
    SuggestionResults {
        query: word.to_string(),
        suggestions,
        duration_ms: start_time.elapsed().as_millis() as u64,
    }
}

/// Print suggestions for every query word given on the command line.
fn suggest_words(args: &SuggestCommandArgs, cli_args: &SuggestArgs) -> Result<()> {
    let config = configured(&args.pipeline, args.limit, cli_args)?;
    let suggester = build_suggester(config, &args.pipeline)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for word in &args.words {
        write_suggestions(&mut out, &query(&suggester, word), cli_args)?;
    }
    Ok(())
}

/// Prompt for words until end of input.
fn run_interactive(args: &ReplArgs, cli_args: &SuggestArgs) -> Result<()> {
    let config = configured(&args.pipeline, args.limit, cli_args)?;
    let suggester = build_suggester(config, &args.pipeline)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(&suggester, stdin.lock(), stdout.lock(), cli_args)
}

/// The prompt loop, over arbitrary input and output.
///
/// Each line is one query word with its line ending removed. Blank lines are
/// skipped; `:q` or end of input stops the loop.
pub fn run_repl<R: BufRead, W: Write>(
    suggester: &Suggester,
    mut input: R,
    mut out: W,
    cli_args: &SuggestArgs,
) -> Result<()> {
    let interactive = cli_args.output_format == OutputFormat::Human;
    let mut line = String::new();

    loop {
        if interactive {
            write!(out, "\nGive a word : ")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let word = line.trim_end_matches(['\r', '\n']);
        if word == QUIT_COMMAND {
            break;
        }
        if word.trim().is_empty() {
            continue;
        }

        write_suggestions(&mut out, &query(suggester, word), cli_args)?;
    }

    if interactive {
        writeln!(out)?;
    }
    Ok(())
}

/// Print vocabulary statistics.
fn show_stats(args: &StatsArgs, cli_args: &SuggestArgs) -> Result<()> {
    let config = configured(&args.pipeline, None, cli_args)?;
    let suggester = build_suggester(config, &args.pipeline)?;

    let stdout = io::stdout();
    write_stats(&mut stdout.lock(), &suggester.stats(), cli_args)
}
