//! The vocabulary pipeline.
//!
//! ```text
//! TextSource ─► SourceText units ─► VocabularyAnalyzer ─► VocabularyDiff ─► ReportWriter
//!                                                             ▲
//!                                            KnownWords ──────┘
//! ```
//!
//! One run loads its own known words, aggregates every unit of its source
//! into a single diff and overwrites its report file. Units fail
//! independently: in a multi-unit source a unit that cannot be fetched is
//! logged and skipped.
//!
//! # Examples
//!
//! ```
//! use wordgap::pipeline::Pipeline;
//! use wordgap::pipeline::config::PipelineConfig;
//! use wordgap::source::StringSource;
//! use wordgap::vocabulary::KnownWords;
//!
//! let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
//! let known = KnownWords::from_words(["the", "quick", "fox"]);
//! let source = StringSource::new("memo", "The quick brown fox");
//!
//! let outcome = pipeline.diff_source(&source, &known).unwrap();
//! assert_eq!(outcome.report.word_list(), vec!["brown"]);
//! ```

use std::path::PathBuf;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::vocabulary::VocabularyAnalyzer;
use crate::error::{Result, WordgapError};
use crate::source::{TextKind, TextSource};
use crate::vocabulary::diff::{DiffReport, VocabularyDiff};
use crate::vocabulary::known_words::KnownWords;
use crate::vocabulary::report::{ReportFormat, ReportWriter};

pub mod config;

use config::PipelineConfig;

/// Result of diffing a source, before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOutcome {
    pub report: DiffReport,
    /// Labels of the units that were processed.
    pub processed: Vec<String>,
    /// Messages of the units that were skipped.
    pub failures: Vec<String>,
}

/// Summary of a complete run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub source: String,
    pub known_words: usize,
    pub output_path: PathBuf,
    pub report_format: ReportFormat,
    pub report: DiffReport,
    pub units_processed: usize,
    pub failures: Vec<String>,
}

/// Runs sources through the diff according to a [`PipelineConfig`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    plain: VocabularyAnalyzer,
    html: VocabularyAnalyzer,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Pipeline {
            config,
            plain: TextKind::Plain.analyzer()?,
            html: TextKind::Html.analyzer()?,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load the configured dictionary.
    ///
    /// With `require_known_words` a missing file fails with
    /// [`WordgapError::MissingFile`] and an empty one with
    /// [`WordgapError::EmptyKnownSet`]. Without it both yield an empty set,
    /// so every word counts as unknown.
    pub fn load_known_words(&self) -> Result<KnownWords> {
        let path = &self.config.dictionary_path;
        let known = match KnownWords::load(path, self.config.dictionary_format) {
            Ok(known) => known,
            Err(WordgapError::MissingFile { path }) if !self.config.require_known_words => {
                warn!(
                    "Dictionary file {} does not exist; treating every word as unknown",
                    path.display()
                );
                KnownWords::new()
            }
            Err(e) => return Err(e),
        };

        if known.is_empty() {
            if self.config.require_known_words {
                return Err(WordgapError::empty_known_set(path));
            }
            warn!("No known words loaded; every word will be reported");
        }

        Ok(known)
    }

    fn analyzer(&self, kind: TextKind) -> &VocabularyAnalyzer {
        match kind {
            TextKind::Plain => &self.plain,
            TextKind::Html => &self.html,
        }
    }

    /// Fetch every unit of `source` and diff the combined tokens against `known`.
    pub fn diff_source(&self, source: &dyn TextSource, known: &KnownWords) -> Result<DiffOutcome> {
        let units = source.fetch_units();
        let total = units.len();
        debug!("{} ({}) yielded {total} units", source.label(), source.name());

        let mut diff = VocabularyDiff::new(known, self.config.mode)
            .with_min_count(self.config.min_count)
            .with_limit(self.config.limit);
        let mut processed = Vec::new();
        let mut failures = Vec::new();

        for (index, unit) in units.into_iter().enumerate() {
            match unit {
                Ok(text) => {
                    let added = diff.add_text(self.analyzer(text.kind), &text.text)?;
                    info!(
                        "Processed {}/{total}: {} ({added} words)",
                        index + 1,
                        text.label
                    );
                    processed.push(text.label);
                }
                Err(e) if total > 1 => {
                    warn!("Error processing unit {}/{total}: {e}", index + 1);
                    failures.push(e.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        if processed.is_empty() && !failures.is_empty() {
            return Err(WordgapError::source_unavailable(format!(
                "all {} units of {} failed",
                failures.len(),
                source.label()
            )));
        }

        let report = diff.finish();
        info!(
            "Total words: {}, unique: {}, unknown: {}",
            report.stats.total_tokens, report.stats.distinct_tokens, report.stats.unknown_words
        );

        Ok(DiffOutcome {
            report,
            processed,
            failures,
        })
    }

    /// Load the dictionary, diff `source` and write the report.
    ///
    /// Nothing is written when the dictionary or the source fails.
    pub fn run(&self, source: &dyn TextSource) -> Result<RunSummary> {
        let known = self.load_known_words()?;
        let outcome = self.diff_source(source, &known)?;

        let report_format = self.config.report_format();
        let output_path =
            ReportWriter::new(report_format).write(&self.config.output_path, &outcome.report.words)?;

        Ok(RunSummary {
            source: source.label(),
            known_words: known.len(),
            output_path,
            report_format,
            units_processed: outcome.processed.len(),
            report: outcome.report,
            failures: outcome.failures,
        })
    }
}
