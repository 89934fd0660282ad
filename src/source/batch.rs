//! Batches of independent units.
//!
//! An inbox is the typical batch: each message is fetched on its own, and a
//! message that fails to load is skipped while the rest are still processed.

use log::warn;

use super::url::UrlSourceConfig;
use super::{SourceText, TextSource, source_for_input};
use crate::error::{Result, WordgapError};

/// Default cap on units per batch (the most recent 50 messages of an inbox).
pub const DEFAULT_MAX_UNITS: usize = 50;

/// A capped list of independent sources.
pub struct BatchSource {
    units: Vec<Box<dyn TextSource>>,
    max_units: usize,
}

impl BatchSource {
    pub fn new() -> Self {
        BatchSource {
            units: Vec::new(),
            max_units: DEFAULT_MAX_UNITS,
        }
    }

    /// Only the first `max_units` units are fetched, counting the units of
    /// nested batches one by one.
    pub fn with_max_units(mut self, max_units: usize) -> Self {
        self.max_units = max_units;
        self
    }

    /// Build a batch from command-line style inputs (paths and URLs).
    ///
    /// An input that cannot be turned into a source (a malformed URL) still
    /// takes its place in the batch and fails when fetched, so it is counted
    /// as a failed unit instead of stopping the run.
    pub fn from_inputs<I, S>(inputs: I, url_config: &UrlSourceConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|input| {
                let input = input.as_ref();
                source_for_input(input, url_config).unwrap_or_else(|e| {
                    warn!("Cannot read {input}: {e}");
                    Box::new(InvalidInput {
                        input: input.to_string(),
                        reason: e.to_string(),
                    }) as Box<dyn TextSource>
                })
            })
            .collect()
    }

    pub fn add_source(mut self, source: Box<dyn TextSource>) -> Self {
        self.units.push(source);
        self
    }

    pub fn push(&mut self, source: Box<dyn TextSource>) {
        self.units.push(source);
    }

    /// Number of members that will be fetched, at most `max_units`.
    pub fn len(&self) -> usize {
        self.units.len().min(self.max_units)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

}

/// Stand-in for an input that could not be turned into a source.
struct InvalidInput {
    input: String,
    reason: String,
}

impl TextSource for InvalidInput {
    fn fetch(&self) -> Result<Vec<SourceText>> {
        Err(WordgapError::source_unavailable(self.reason.clone()))
    }

    fn label(&self) -> String {
        self.input.clone()
    }

    fn name(&self) -> &'static str {
        "invalid"
    }
}

impl Default for BatchSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Box<dyn TextSource>> for BatchSource {
    fn from_iter<I: IntoIterator<Item = Box<dyn TextSource>>>(iter: I) -> Self {
        BatchSource {
            units: iter.into_iter().collect(),
            max_units: DEFAULT_MAX_UNITS,
        }
    }
}

impl TextSource for BatchSource {
    /// Fetch all members, skipping the ones that fail.
    ///
    /// Errors only when there were members and every one of them failed.
    fn fetch(&self) -> Result<Vec<SourceText>> {
        let mut texts = Vec::new();
        let mut failed = 0;

        for result in self.fetch_units() {
            match result {
                Ok(text) => texts.push(text),
                Err(e) => {
                    warn!("Skipping unit: {e}");
                    failed += 1;
                }
            }
        }

        if texts.is_empty() && failed > 0 {
            return Err(WordgapError::source_unavailable(format!(
                "all {failed} units of {} failed",
                self.label()
            )));
        }
        Ok(texts)
    }

    fn fetch_units(&self) -> Vec<Result<SourceText>> {
        self.units
            .iter()
            .flat_map(|unit| unit.fetch_units())
            .take(self.max_units)
            .collect()
    }

    fn label(&self) -> String {
        format!("batch of {} units", self.len())
    }

    fn name(&self) -> &'static str {
        "batch"
    }
}
