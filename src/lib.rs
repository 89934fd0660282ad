//! # wordgap
//!
//! Find the words a language learner does not know yet.
//!
//! Text is pulled from a [`source::TextSource`] (a local file, a web page, an
//! in-memory string or a batch of independent units such as the messages of
//! an inbox), split into lower-cased alphabetic tokens by the
//! [`analysis`] pipeline, diffed against a [`vocabulary::KnownWords`] set and
//! written out by a [`vocabulary::ReportWriter`].
//!
//! ```
//! use wordgap::analysis::VocabularyAnalyzer;
//! use wordgap::vocabulary::{DiffMode, KnownWords, VocabularyDiff};
//!
//! let known = KnownWords::from_words(["the", "quick", "fox"]);
//! let analyzer = VocabularyAnalyzer::plain_text().unwrap();
//!
//! let mut diff = VocabularyDiff::new(&known, DiffMode::Set);
//! diff.add_text(&analyzer, "The Quick Brown Fox").unwrap();
//!
//! assert_eq!(diff.finish().word_list(), vec!["brown"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod vocabulary;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
