//! Text analysis for vocabulary extraction.
//!
//! This module turns raw text into the normalized word tokens that the
//! vocabulary diff works on: char filters, a tokenizer and token filters
//! combined by an analyzer.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, VocabularyAnalyzer};
pub use token::{Token, TokenStream};
