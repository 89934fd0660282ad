//! The personal "known words" dictionary.
//!
//! Two on-disk layouts are in use:
//!
//! - one word per line (a plain word list, possibly produced by a previous run)
//! - a free-form document (markdown notes, tables, prose) from which every
//!   word is extracted
//!
//! [`DictionaryFormat::Auto`] picks the layout from the content.

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::vocabulary::VocabularyAnalyzer;
use crate::error::{Result, WordgapError};

/// How a dictionary file is parsed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryFormat {
    /// `Lines` when every non-empty line is a single word, `Document` otherwise
    #[default]
    Auto,
    /// One word per line
    Lines,
    /// Extract every word from the whole document
    Document,
}

impl DictionaryFormat {
    /// Inspect `content` and choose between `Lines` and `Document`.
    pub fn detect(content: &str) -> DictionaryFormat {
        let single_words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .all(|line| line.bytes().all(|b| b.is_ascii_alphabetic()));

        if single_words {
            DictionaryFormat::Lines
        } else {
            DictionaryFormat::Document
        }
    }
}

/// A set of normalized (lower-cased) known words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownWords {
    words: AHashSet<String>,
}

impl KnownWords {
    /// Create an empty set: every word is unknown.
    pub fn new() -> Self {
        KnownWords {
            words: AHashSet::new(),
        }
    }

    /// Build a set from words, normalizing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut known = KnownWords::new();
        for word in words {
            known.insert(word.as_ref());
        }
        known
    }

    /// Insert a word after trimming and lower-casing it. Blank input is ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word is known.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Known words in alphabetical order.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Add every word of `other` to this set.
    pub fn merge(&mut self, other: &KnownWords) {
        self.words.extend(other.words.iter().cloned());
    }

    /// Parse dictionary content in the given format.
    pub fn parse(content: &str, format: DictionaryFormat) -> Result<Self> {
        Ok(Self::parse_with_format(content, format)?.0)
    }

    /// Parse dictionary content, also returning the format actually used
    /// (never [`DictionaryFormat::Auto`]).
    pub fn parse_with_format(
        content: &str,
        format: DictionaryFormat,
    ) -> Result<(Self, DictionaryFormat)> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let format = match format {
            DictionaryFormat::Auto => DictionaryFormat::detect(content),
            other => other,
        };
        debug!("Parsing dictionary as {format:?}");

        let known = match format {
            DictionaryFormat::Lines => KnownWords::from_words(content.lines()),
            _ => {
                let analyzer = VocabularyAnalyzer::plain_text()?;
                KnownWords::from_words(analyzer.words(content)?)
            }
        };
        Ok((known, format))
    }

    /// Load a dictionary file.
    ///
    /// Fails with [`WordgapError::MissingFile`] when `path` does not exist. An
    /// existing empty file yields an empty set.
    pub fn load<P: AsRef<Path>>(path: P, format: DictionaryFormat) -> Result<Self> {
        Ok(Self::load_with_format(path, format)?.0)
    }

    /// Load a dictionary file, also returning the format it was parsed as.
    pub fn load_with_format<P: AsRef<Path>>(
        path: P,
        format: DictionaryFormat,
    ) -> Result<(Self, DictionaryFormat)> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| WordgapError::from_io_at(e, path))?;
        let (known, format) = KnownWords::parse_with_format(&content, format)?;

        info!("Loaded {} known words from {}", known.len(), path.display());
        Ok((known, format))
    }
}

impl<S: AsRef<str>> FromIterator<S> for KnownWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KnownWords::from_words(iter)
    }
}
