//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordgapArgs};
use crate::error::Result;
use crate::pipeline::RunSummary;
use crate::vocabulary::diff::DiffMode;
use crate::vocabulary::known_words::DictionaryFormat;

/// Number of unknown words previewed after a run.
pub const PREVIEW_LIMIT: usize = 10;

/// Result structure for the dictionary command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub detected_format: DictionaryFormat,
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
}

/// Print a run summary in the requested format.
pub fn output_run_summary(summary: &RunSummary, args: &WordgapArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(summary),
        OutputFormat::Human => {
            print!("{}", render_run_summary(summary, args.verbosity()));
            Ok(())
        }
    }
}

/// Print dictionary statistics in the requested format.
pub fn output_dictionary_stats(stats: &DictionaryStats, args: &WordgapArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(stats),
        OutputFormat::Human => {
            println!("Dictionary: {}", stats.path);
            println!("Format: {:?}", stats.detected_format);
            println!("Known words: {}", stats.word_count);
            if let Some(words) = &stats.words {
                println!();
                for word in words {
                    println!("{word}");
                }
            }
            Ok(())
        }
    }
}

fn output_json<T: Serialize>(result: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Human-readable run summary with a preview of the first unknown words.
///
/// Verbosity 0 prints nothing.
pub fn render_run_summary(summary: &RunSummary, verbosity: u8) -> String {
    let mut out = String::new();
    if verbosity == 0 {
        return out;
    }

    let words = &summary.report.words;
    out.push_str(&format!("Found {} unknown words.\n", words.len()));
    out.push_str(&format!(
        "Results saved to '{}'\n",
        summary.output_path.display()
    ));

    if verbosity > 1 {
        let stats = &summary.report.stats;
        out.push_str(&format!("Known words loaded: {}\n", summary.known_words));
        out.push_str(&format!(
            "Units processed: {} ({} skipped)\n",
            summary.units_processed,
            summary.failures.len()
        ));
        out.push_str(&format!(
            "Total words in text: {}, unique: {}\n",
            stats.total_tokens, stats.distinct_tokens
        ));
    }

    if !summary.failures.is_empty() {
        out.push_str(&format!("\nSkipped {} units:\n", summary.failures.len()));
        for failure in &summary.failures {
            out.push_str(&format!("  ! {failure}\n"));
        }
    }

    if !words.is_empty() {
        let preview = words.len().min(PREVIEW_LIMIT);
        out.push_str(&format!("\nPreview of first {preview} unknown words:\n"));
        for entry in &words[..preview] {
            if summary.report.mode == DiffMode::Frequency {
                out.push_str(&format!("  - {} ({})\n", entry.word, entry.count));
            } else {
                out.push_str(&format!("  - {}\n", entry.word));
            }
        }
        if words.len() > preview {
            out.push_str(&format!("  ... and {} more\n", words.len() - preview));
        }
    }

    out
}
