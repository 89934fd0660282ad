//! Analyzer used for vocabulary extraction.
//!
//! # Pipeline
//!
//! 1. HtmlStripCharFilter (only for markup sources)
//! 2. RegexTokenizer (`[A-Za-z]+`)
//! 3. LowercaseFilter
//!
//! No stemming and no stop-word removal: every word counts.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::html::HtmlStripCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Extracts lower-cased ASCII words from text.
#[derive(Clone, Debug)]
pub struct VocabularyAnalyzer {
    inner: PipelineAnalyzer,
    strips_markup: bool,
}

impl VocabularyAnalyzer {
    /// Analyzer for plain text (files, rendered page text, message bodies).
    pub fn plain_text() -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()));

        Ok(VocabularyAnalyzer {
            inner: analyzer,
            strips_markup: false,
        })
    }

    /// Analyzer for HTML page sources; markup is blanked out before tokenizing.
    pub fn html() -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new()?))
            .add_char_filter(Arc::new(HtmlStripCharFilter::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()));

        Ok(VocabularyAnalyzer {
            inner: analyzer,
            strips_markup: true,
        })
    }

    /// Whether this analyzer strips markup before tokenizing.
    pub fn strips_markup(&self) -> bool {
        self.strips_markup
    }

    /// Convenience: analyze `text` and collect only the token texts.
    pub fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

impl Default for VocabularyAnalyzer {
    fn default() -> Self {
        Self::plain_text().expect("Vocabulary analyzer should be creatable with default settings")
    }
}

impl Analyzer for VocabularyAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        if self.strips_markup {
            "vocabulary_html"
        } else {
            "vocabulary"
        }
    }
}
