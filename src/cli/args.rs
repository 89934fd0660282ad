//! Command line argument parsing for the wordgap CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::config::PipelineConfig;
use crate::vocabulary::diff::DiffMode;
use crate::vocabulary::known_words::DictionaryFormat;
use crate::vocabulary::report::ReportFormat;

/// wordgap - find the words you don't know yet
#[derive(Parser, Debug, Clone)]
#[command(name = "wordgap")]
#[command(about = "Diff the vocabulary of emails, text files and web pages against your known words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordgapArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format of the summary printed to stdout
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordgapArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find unknown words in a local text file
    File(FileArgs),

    /// Find unknown words on a web page
    Url(UrlArgs),

    /// Find unknown words across many files and/or URLs, skipping the ones that fail
    Batch(BatchArgs),

    /// Show what a known words file contains
    Dictionary(DictionaryArgs),
}

/// Options shared by every diffing command.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Known words file
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// How to parse the known words file
    #[arg(long, value_name = "FORMAT")]
    pub dictionary_format: Option<DictionaryFormat>,

    /// Report file (overwritten)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Report file format (default: table for frequency mode, list for set mode)
    #[arg(short, long, value_name = "FORMAT")]
    pub report_format: Option<ReportFormat>,

    /// Diff mode
    #[arg(short, long)]
    pub mode: Option<DiffMode>,

    /// Only report words seen at least this many times
    #[arg(long)]
    pub min_count: Option<usize>,

    /// Maximum number of words to report
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Continue with an empty dictionary when the file is missing or empty
    #[arg(long)]
    pub allow_empty_dictionary: bool,

    /// JSON configuration file; command line options override it
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl RunArgs {
    /// Build the pipeline configuration: defaults (with `default_mode`), then
    /// the config file, then command line overrides.
    pub fn to_config(&self, default_mode: DiffMode) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig {
                mode: default_mode,
                ..PipelineConfig::default()
            },
        };

        if let Some(dictionary) = &self.dictionary {
            config.dictionary_path = dictionary.clone();
        }
        if let Some(format) = self.dictionary_format {
            config.dictionary_format = format;
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(format) = self.report_format {
            config.report_format = Some(format);
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(min_count) = self.min_count {
            config.min_count = min_count;
        }
        if self.limit.is_some() {
            config.limit = self.limit;
        }
        if self.allow_empty_dictionary {
            config.require_known_words = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the file command
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Text file to analyze
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for the url command
#[derive(Parser, Debug, Clone)]
pub struct UrlArgs {
    /// Page to analyze
    #[arg(value_name = "URL")]
    pub url: String,

    /// Give up on the page after this many seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for the batch command
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Files and URLs to analyze
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Process at most this many inputs
    #[arg(long)]
    pub max_units: Option<usize>,

    /// Give up on a page after this many seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Arguments for the dictionary command
#[derive(Parser, Debug, Clone)]
pub struct DictionaryArgs {
    /// Known words file
    #[arg(value_name = "DICTIONARY")]
    pub path: PathBuf,

    /// How to parse the file
    #[arg(long, value_name = "FORMAT", default_value = "auto")]
    pub dictionary_format: DictionaryFormat,

    /// List every word
    #[arg(long)]
    pub words: bool,
}

/// Output formats for CLI summaries
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
