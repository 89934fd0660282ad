//! Text source adapters.
//!
//! A [`TextSource`] hands raw text to the pipeline. Where the text comes from
//! (a local file, a web page, a batch of messages) is the adapter's concern;
//! the pipeline only sees [`SourceText`] units.
//!
//! Failures to reach a source are reported as
//! [`WordgapError::SourceUnavailable`](crate::error::WordgapError::SourceUnavailable),
//! missing local files as
//! [`WordgapError::MissingFile`](crate::error::WordgapError::MissingFile).

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::vocabulary::VocabularyAnalyzer;
use crate::error::Result;

pub mod batch;
pub mod file;
pub mod text;
pub mod url;

pub use batch::BatchSource;
pub use file::FileSource;
pub use text::StringSource;
pub use url::{UrlSource, UrlSourceConfig};

/// What kind of text a unit carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    /// Plain or rendered text
    #[default]
    Plain,
    /// HTML source; markup must be stripped before tokenizing
    Html,
}

impl TextKind {
    /// The analyzer suited to this kind of text.
    pub fn analyzer(&self) -> Result<VocabularyAnalyzer> {
        match self {
            TextKind::Plain => VocabularyAnalyzer::plain_text(),
            TextKind::Html => VocabularyAnalyzer::html(),
        }
    }
}

/// One unit of raw text produced by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// Where the text came from (path, URL, message number), for logs and summaries
    pub label: String,
    pub text: String,
    pub kind: TextKind,
}

impl SourceText {
    pub fn new<L: Into<String>, T: Into<String>>(label: L, text: T, kind: TextKind) -> Self {
        SourceText {
            label: label.into(),
            text: text.into(),
            kind,
        }
    }

    pub fn plain<L: Into<String>, T: Into<String>>(label: L, text: T) -> Self {
        Self::new(label, text, TextKind::Plain)
    }
}

/// Trait for adapters that supply raw text.
pub trait TextSource: Send + Sync {
    /// Fetch every unit of text this source provides.
    fn fetch(&self) -> Result<Vec<SourceText>>;

    /// Fetch units one by one, keeping per-unit failures apart.
    ///
    /// Single sources yield one result; [`BatchSource`] yields one per member
    /// so a failing member does not hide the others.
    fn fetch_units(&self) -> Vec<Result<SourceText>> {
        match self.fetch() {
            Ok(texts) => texts.into_iter().map(Ok).collect(),
            Err(e) => vec![Err(e)],
        }
    }

    /// Human-readable description (path, URL, ...).
    fn label(&self) -> String;

    /// Get the name of this source type.
    fn name(&self) -> &'static str;
}

/// Build a source from a command-line style input: `http(s)://` URLs become
/// [`UrlSource`]s, anything else a [`FileSource`].
pub fn source_for_input(input: &str, url_config: &UrlSourceConfig) -> Result<Box<dyn TextSource>> {
    if input.starts_with("http://") || input.starts_with("https://") {
        Ok(Box::new(UrlSource::with_config(input, url_config.clone())?))
    } else {
        Ok(Box::new(FileSource::new(input)))
    }
}
