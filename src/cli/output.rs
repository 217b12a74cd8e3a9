//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SuggestArgs};
use crate::error::Result;
use crate::similarity::Suggestion;
use crate::vocabulary::VocabularyStats;

/// Suggestions produced for one query word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    pub duration_ms: u64,
}

/// Output the suggestions for a query in the requested format.
pub fn write_suggestions<W: Write>(
    out: &mut W,
    results: &SuggestionResults,
    args: &SuggestArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_suggestions_human(out, results, args),
        OutputFormat::Json => write_json(out, results, args),
    }
}

/// Output vocabulary statistics in the requested format.
pub fn write_stats<W: Write>(out: &mut W, stats: &VocabularyStats, args: &SuggestArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_stats_human(out, stats),
        OutputFormat::Json => write_json(out, stats, args),
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, args: &SuggestArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_suggestions_human<W: Write>(
    out: &mut W,
    results: &SuggestionResults,
    args: &SuggestArgs,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Final Suggestions for {:?}:", results.query)?;
    writeln!(out)?;

    if results.suggestions.is_empty() {
        writeln!(out, "\t(no similar words)")?;
    }

    let width = results
        .suggestions
        .iter()
        .map(|s| s.word.chars().count())
        .max()
        .unwrap_or(0);

    for suggestion in &results.suggestions {
        writeln!(
            out,
            "\t>> {:<width$}  {:.6}",
            suggestion.word,
            suggestion.score,
            width = width
        )?;
    }

    if args.verbosity() > 1 {
        writeln!(out)?;
        writeln!(out, "Ranked in {} ms", results.duration_ms)?;
    }

    Ok(())
}

fn write_stats_human<W: Write>(out: &mut W, stats: &VocabularyStats) -> Result<()> {
    writeln!(out, "Vocabulary Statistics:")?;
    writeln!(out, "══════════════════════")?;
    writeln!(out, "Training words:     {}", stats.training_words)?;
    writeln!(out, "Dimensions:         {}", stats.dimension)?;
    writeln!(out, "N-gram occurrences: {}", stats.total_occurrences)?;

    if !stats.top_ngrams.is_empty() {
        writeln!(out)?;
        writeln!(out, "Most frequent n-grams:")?;
        for (gram, frequency) in &stats.top_ngrams {
            writeln!(out, "\t{gram:<8} {frequency}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn args(extra: &[&str]) -> SuggestArgs {
        let mut argv = vec!["ngram-suggest"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["stats", "words.txt"]);
        SuggestArgs::try_parse_from(argv).unwrap()
    }

    fn results() -> SuggestionResults {
        SuggestionResults {
            query: "blue".to_string(),
            suggestions: vec![
                Suggestion::new("blue".to_string(), 1.0),
                Suggestion::new("glue".to_string(), 0.5),
            ],
            duration_ms: 0,
        }
    }

    #[test]
    fn test_human_suggestions() {
        let mut out = Vec::new();
        write_suggestions(&mut out, &results(), &args(&[])).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(">> blue  1.000000"));
        assert!(text.contains(">> glue  0.500000"));
        assert!(text.find("blue  1.0").unwrap() < text.find("glue").unwrap());
    }

    #[test]
    fn test_human_empty_suggestions() {
        let mut out = Vec::new();
        let empty = SuggestionResults {
            query: "zzzzz".to_string(),
            suggestions: Vec::new(),
            duration_ms: 0,
        };
        write_suggestions(&mut out, &empty, &args(&[])).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("no similar words"));
    }

    #[test]
    fn test_json_suggestions() {
        let mut out = Vec::new();
        write_suggestions(&mut out, &results(), &args(&["--format", "json"])).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["query"], "blue");
        assert_eq!(value["suggestions"][0]["word"], "blue");
        assert_eq!(value["suggestions"][1]["score"], 0.5);
    }

    #[test]
    fn test_stats_output() {
        let stats = VocabularyStats {
            training_words: 3,
            dimension: 4,
            total_occurrences: 6,
            top_ngrams: vec![("lue".to_string(), 3)],
        };

        let mut out = Vec::new();
        write_stats(&mut out, &stats, &args(&[])).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Dimensions:         4"));
        assert!(text.contains("lue"));
    }
}
