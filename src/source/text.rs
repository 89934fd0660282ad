//! In-memory text source.

use super::{SourceText, TextKind, TextSource};
use crate::error::Result;

/// A source wrapping text that is already at hand, such as a message body
/// handed over by a mail client or text rendered by a browser.
#[derive(Debug, Clone)]
pub struct StringSource {
    label: String,
    text: String,
    kind: TextKind,
}

impl StringSource {
    pub fn new<L: Into<String>, T: Into<String>>(label: L, text: T) -> Self {
        StringSource {
            label: label.into(),
            text: text.into(),
            kind: TextKind::Plain,
        }
    }

    /// Mark the text as HTML source.
    pub fn html(mut self) -> Self {
        self.kind = TextKind::Html;
        self
    }
}

impl TextSource for StringSource {
    fn fetch(&self) -> Result<Vec<SourceText>> {
        Ok(vec![SourceText::new(
            self.label.clone(),
            self.text.clone(),
            self.kind,
        )])
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
