//! The vocabulary diff engine.
//!
//! Tokens are tallied per word in one pass, words present in the
//! [`KnownWords`] set are filtered out, and the remainder is ordered by the
//! active [`DiffMode`]:
//!
//! - [`DiffMode::Set`]: unique unknown words, alphabetical
//! - [`DiffMode::Frequency`]: unknown words with occurrence counts, most
//!   frequent first, ties in alphabetical order
//!
//! # Examples
//!
//! ```
//! use wordgap::analysis::analyzer::vocabulary::VocabularyAnalyzer;
//! use wordgap::vocabulary::{DiffMode, KnownWords, VocabularyDiff};
//!
//! let known = KnownWords::from_words(["the", "quick", "fox"]);
//! let analyzer = VocabularyAnalyzer::plain_text().unwrap();
//!
//! let mut diff = VocabularyDiff::new(&known, DiffMode::Frequency);
//! diff.add_text(&analyzer, "The Quick Brown Fox jumps over the lazy dog. The DOG barks.").unwrap();
//! let report = diff.finish();
//!
//! assert_eq!(report.words[0].word, "dog");
//! assert_eq!(report.words[0].count, 2);
//! ```

use std::cmp::Ordering;

use ahash::AHashMap;
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::Token;
use crate::error::Result;
use crate::vocabulary::known_words::KnownWords;

/// Output mode of the diff.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Unique unknown words in alphabetical order
    Set,
    /// Unknown words with counts, most frequent first
    #[default]
    Frequency,
}

/// A word missing from the known set, with how often it occurred.
///
/// In [`DiffMode::Set`] the count is always 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnknownWord {
    pub word: String,
    pub count: usize,
}

impl UnknownWord {
    pub fn new<S: Into<String>>(word: S, count: usize) -> Self {
        UnknownWord {
            word: word.into(),
            count,
        }
    }
}

/// Counters describing what the diff saw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Tokens fed into the diff, duplicates included
    pub total_tokens: usize,
    /// Distinct tokens fed into the diff
    pub distinct_tokens: usize,
    /// Distinct tokens found in the known set
    pub known_tokens: usize,
    /// Entries in the final report
    pub unknown_words: usize,
    /// Text units added (documents, pages, messages)
    pub units: usize,
}

/// Ordered diff output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    pub mode: DiffMode,
    pub words: Vec<UnknownWord>,
    pub stats: DiffStats,
}

impl DiffReport {
    /// The bare words, in report order.
    pub fn word_list(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.word.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

/// Accumulates tokens and diffs them against a known set.
///
/// Counts aggregate across every unit added, so one diff covers a whole run.
#[derive(Debug, Clone)]
pub struct VocabularyDiff<'a> {
    known: &'a KnownWords,
    mode: DiffMode,
    counts: AHashMap<String, usize>,
    total_tokens: usize,
    units: usize,
    min_count: usize,
    limit: Option<usize>,
}

impl<'a> VocabularyDiff<'a> {
    pub fn new(known: &'a KnownWords, mode: DiffMode) -> Self {
        VocabularyDiff {
            known,
            mode,
            counts: AHashMap::new(),
            total_tokens: 0,
            units: 0,
            min_count: 1,
            limit: None,
        }
    }

    /// Drop unknown words seen fewer than `min_count` times (frequency mode).
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count.max(1);
        self
    }

    /// Keep at most `limit` entries of the ordered output.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn mode(&self) -> DiffMode {
        self.mode
    }

    /// Tally words as one unit. Words are lower-cased before counting.
    pub fn add_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for word in words {
            let word = word.into();
            let word = if word.chars().any(char::is_uppercase) {
                word.to_lowercase()
            } else {
                word
            };
            *self.counts.entry(word).or_insert(0) += 1;
            added += 1;
        }
        self.total_tokens += added;
        self.units += 1;
        added
    }

    /// Tally tokens as one unit.
    pub fn add_tokens<I>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = Token>,
    {
        self.add_words(tokens.into_iter().map(|token| token.text))
    }

    /// Analyze `text` and tally its tokens as one unit.
    pub fn add_text(&mut self, analyzer: &dyn Analyzer, text: &str) -> Result<usize> {
        let added = self.add_tokens(analyzer.analyze(text)?);
        debug!("Added {added} tokens ({} distinct so far)", self.counts.len());
        Ok(added)
    }

    /// Filter and order the tallied words.
    ///
    /// Does not consume the accumulated counts: calling it twice returns the
    /// same report.
    pub fn finish(&self) -> DiffReport {
        let mut known_tokens = 0;
        let mut words: Vec<UnknownWord> = Vec::with_capacity(self.counts.len());

        for (word, &count) in &self.counts {
            if self.known.contains(word) {
                known_tokens += 1;
                continue;
            }
            match self.mode {
                DiffMode::Set => words.push(UnknownWord::new(word.clone(), 1)),
                DiffMode::Frequency if count >= self.min_count => {
                    words.push(UnknownWord::new(word.clone(), count))
                }
                DiffMode::Frequency => {}
            }
        }

        sort_unknown_words(&mut words, self.mode);
        if let Some(limit) = self.limit {
            words.truncate(limit);
        }

        DiffReport {
            mode: self.mode,
            stats: DiffStats {
                total_tokens: self.total_tokens,
                distinct_tokens: self.counts.len(),
                known_tokens,
                unknown_words: words.len(),
                units: self.units,
            },
            words,
        }
    }
}

/// Order words for `mode`: alphabetical for sets; descending count then
/// alphabetical for frequencies.
pub fn sort_unknown_words(words: &mut [UnknownWord], mode: DiffMode) {
    match mode {
        DiffMode::Set => words.sort_unstable_by(|a, b| a.word.cmp(&b.word)),
        DiffMode::Frequency => words.sort_unstable_by(compare_by_frequency),
    }
}

fn compare_by_frequency(a: &UnknownWord, b: &UnknownWord) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// One-shot diff of a token sequence.
pub fn diff_tokens<I>(tokens: I, known: &KnownWords, mode: DiffMode) -> Vec<UnknownWord>
where
    I: IntoIterator<Item = Token>,
{
    let mut diff = VocabularyDiff::new(known, mode);
    diff.add_tokens(tokens);
    diff.finish().words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::vocabulary::VocabularyAnalyzer;
    use crate::analysis::tokenizer::Tokenizer;
    use crate::analysis::tokenizer::regex::RegexTokenizer;

    const TEXT: &str = "The Quick Brown Fox jumps over the lazy dog. The DOG barks.";

    fn known() -> KnownWords {
        KnownWords::from_words(["the", "quick", "fox"])
    }

    fn run(mode: DiffMode, text: &str) -> DiffReport {
        let known = known();
        let analyzer = VocabularyAnalyzer::plain_text().unwrap();
        let mut diff = VocabularyDiff::new(&known, mode);
        diff.add_text(&analyzer, text).unwrap();
        diff.finish()
    }

    #[test]
    fn test_set_mode() {
        let report = run(DiffMode::Set, TEXT);
        assert_eq!(
            report.word_list(),
            vec!["barks", "brown", "dog", "jumps", "lazy", "over"]
        );
        assert!(report.words.iter().all(|w| w.count == 1));
    }

    #[test]
    fn test_frequency_mode() {
        let report = run(DiffMode::Frequency, TEXT);
        assert_eq!(
            report.words,
            vec![
                UnknownWord::new("dog", 2),
                UnknownWord::new("barks", 1),
                UnknownWord::new("brown", 1),
                UnknownWord::new("jumps", 1),
                UnknownWord::new("lazy", 1),
                UnknownWord::new("over", 1),
            ]
        );
    }

    #[test]
    fn test_stats() {
        let report = run(DiffMode::Frequency, TEXT);
        assert_eq!(report.stats.total_tokens, 12);
        assert_eq!(report.stats.distinct_tokens, 9);
        assert_eq!(report.stats.known_tokens, 3);
        assert_eq!(report.stats.unknown_words, 6);
        assert_eq!(report.stats.units, 1);
    }

    #[test]
    fn test_known_words_never_reported() {
        let report = run(DiffMode::Set, "THE the The tHe QUICK fox FOX");
        assert!(report.is_empty());
    }

    #[test]
    fn test_finish_is_idempotent() {
        let known = known();
        let analyzer = VocabularyAnalyzer::plain_text().unwrap();
        let mut diff = VocabularyDiff::new(&known, DiffMode::Frequency);
        diff.add_text(&analyzer, TEXT).unwrap();

        assert_eq!(diff.finish(), diff.finish());
        assert_eq!(run(DiffMode::Frequency, TEXT), run(DiffMode::Frequency, TEXT));
    }

    #[test]
    fn test_frequency_ties_are_alphabetical() {
        let known = KnownWords::new();
        let mut diff = VocabularyDiff::new(&known, DiffMode::Frequency);
        diff.add_words(["pear", "apple", "pear", "zebra", "apple", "kiwi"]);

        let report = diff.finish();
        assert_eq!(report.word_list(), vec!["apple", "pear", "kiwi", "zebra"]);
    }

    #[test]
    fn test_aggregates_across_units() {
        let known = known();
        let analyzer = VocabularyAnalyzer::plain_text().unwrap();
        let mut diff = VocabularyDiff::new(&known, DiffMode::Frequency);
        diff.add_text(&analyzer, "dog cat").unwrap();
        diff.add_text(&analyzer, "Dog bird").unwrap();

        let report = diff.finish();
        assert_eq!(report.words[0], UnknownWord::new("dog", 2));
        assert_eq!(report.stats.units, 2);
    }

    #[test]
    fn test_min_count_and_limit() {
        let known = KnownWords::new();
        let mut diff = VocabularyDiff::new(&known, DiffMode::Frequency)
            .with_min_count(2)
            .with_limit(Some(1));
        diff.add_words(["a", "a", "b", "b", "b", "c"]);

        let report = diff.finish();
        assert_eq!(report.words, vec![UnknownWord::new("b", 3)]);
    }

    #[test]
    fn test_min_count_ignored_in_set_mode() {
        let known = KnownWords::new();
        let mut diff = VocabularyDiff::new(&known, DiffMode::Set).with_min_count(5);
        diff.add_words(["b", "a"]);

        assert_eq!(diff.finish().word_list(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        let known = known();
        let report = diff_tokens(Vec::new(), &known, DiffMode::Set);
        assert!(report.is_empty());
    }

    #[test]
    fn test_mixed_case_words_are_folded() {
        let known = KnownWords::from_words(["fox"]);
        let mut diff = VocabularyDiff::new(&known, DiffMode::Frequency);
        diff.add_words(["Dog", "dog", "DOG", "FOX"]);

        let report = diff.finish();
        assert_eq!(report.words, vec![UnknownWord::new("dog", 3)]);
        assert_eq!(report.stats.distinct_tokens, 2);
        assert_eq!(report.stats.known_tokens, 1);
    }

    #[test]
    fn test_raw_tokenizer_output_is_folded() {
        let tokens = RegexTokenizer::new().unwrap().tokenize("Dog dog").unwrap();
        let words = diff_tokens(tokens, &KnownWords::new(), DiffMode::Set);
        assert_eq!(words, vec![UnknownWord::new("dog", 1)]);
    }

    #[test]
    fn test_empty_known_set_reports_everything() {
        let known = KnownWords::new();
        let words = diff_tokens(
            vec![Token::new("b"), Token::new("a")],
            &known,
            DiffMode::Set,
        );
        assert_eq!(words, vec![UnknownWord::new("a", 1), UnknownWord::new("b", 1)]);
    }
}
