//! Configuration for a vocabulary run.
//!
//! # Examples
//!
//! ```
//! use wordgap::pipeline::config::PipelineConfig;
//! use wordgap::vocabulary::{DiffMode, ReportFormat};
//!
//! let config = PipelineConfig::default();
//! assert_eq!(config.dictionary_path.to_str(), Some("knowed-words.md"));
//! assert_eq!(config.report_format(), ReportFormat::Table);
//!
//! let mut config = PipelineConfig::default();
//! config.mode = DiffMode::Set;
//! assert_eq!(config.report_format(), ReportFormat::List);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordgapError};
use crate::source::batch::DEFAULT_MAX_UNITS;
use crate::source::url::UrlSourceConfig;
use crate::vocabulary::diff::DiffMode;
use crate::vocabulary::known_words::DictionaryFormat;
use crate::vocabulary::report::ReportFormat;

/// Default dictionary file name.
pub const DEFAULT_DICTIONARY: &str = "knowed-words.md";

/// Default report file name.
pub const DEFAULT_OUTPUT: &str = "unknown_words.md";

/// Everything a run needs besides its text source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Path to the known words file.
    pub dictionary_path: PathBuf,
    /// How to parse the known words file.
    pub dictionary_format: DictionaryFormat,
    /// Abort when the dictionary is missing or empty instead of treating
    /// every word as unknown.
    pub require_known_words: bool,
    /// Set or frequency output.
    pub mode: DiffMode,
    /// Minimum occurrences for a word to be reported (frequency mode).
    pub min_count: usize,
    /// Maximum number of reported words.
    pub limit: Option<usize>,
    /// Where the report is written.
    pub output_path: PathBuf,
    /// Report shape; derived from `mode` when unset.
    pub report_format: Option<ReportFormat>,
    /// HTTP settings for web page sources.
    pub http: UrlSourceConfig,
    /// Cap on units processed in a batch.
    pub max_units: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
            dictionary_format: DictionaryFormat::Auto,
            require_known_words: true,
            mode: DiffMode::Frequency,
            min_count: 1,
            limit: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            report_format: None,
            http: UrlSourceConfig::default(),
            max_units: DEFAULT_MAX_UNITS,
        }
    }
}

impl PipelineConfig {
    /// Load a JSON configuration file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| WordgapError::from_io_at(e, path))?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save this configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The effective report format: explicit, or a table for frequencies and
    /// a plain list for sets.
    pub fn report_format(&self) -> ReportFormat {
        self.report_format.unwrap_or(match self.mode {
            DiffMode::Frequency => ReportFormat::Table,
            DiffMode::Set => ReportFormat::List,
        })
    }

    /// Check values that would make a run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.min_count == 0 {
            return Err(WordgapError::invalid_argument("min_count must be at least 1"));
        }
        if self.max_units == 0 {
            return Err(WordgapError::invalid_argument("max_units must be at least 1"));
        }
        if self.http.timeout_secs == 0 {
            return Err(WordgapError::invalid_argument(
                "http.timeout_secs must be at least 1",
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(WordgapError::invalid_argument("output_path must not be empty"));
        }
        Ok(())
    }
}
