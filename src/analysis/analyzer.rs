//! Analyzers turn raw text into normalized tokens.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 … Filter N → Token Stream
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`VocabularyAnalyzer`](vocabulary::VocabularyAnalyzer) - ASCII words, lower-cased,
//!   with optional markup stripping
//!
//! # Examples
//!
//! ```
//! use wordgap::analysis::analyzer::Analyzer;
//! use wordgap::analysis::analyzer::vocabulary::VocabularyAnalyzer;
//!
//! let analyzer = VocabularyAnalyzer::plain_text().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod pipeline;
pub mod vocabulary;

pub use pipeline::PipelineAnalyzer;
pub use vocabulary::VocabularyAnalyzer;
