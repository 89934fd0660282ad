//! Vocabulary diffing: known words, the diff engine and report writing.
//!
//! ```text
//! tokens ─┐
//!         ├─► VocabularyDiff ─► DiffReport ─► ReportWriter ─► file
//! KnownWords
//! ```

pub mod diff;
pub mod known_words;
pub mod report;

pub use diff::{DiffMode, DiffReport, DiffStats, UnknownWord, VocabularyDiff};
pub use known_words::{DictionaryFormat, KnownWords};
pub use report::{ReportFormat, ReportWriter};
