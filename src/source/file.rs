//! Local file source.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::{SourceText, TextKind, TextSource};
use crate::error::{Result, WordgapError};

/// Reads a UTF-8 text file. Files ending in `.html`/`.htm` are treated as markup.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn kind(&self) -> TextKind {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
                TextKind::Html
            }
            _ => TextKind::Plain,
        }
    }
}

impl TextSource for FileSource {
    fn fetch(&self) -> Result<Vec<SourceText>> {
        let text =
            fs::read_to_string(&self.path).map_err(|e| WordgapError::from_io_at(e, &self.path))?;
        debug!("Read {} bytes from {}", text.len(), self.path.display());

        Ok(vec![SourceText::new(self.label(), text, self.kind())])
    }

    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("article.txt");
        fs::write(&path, "Some text").unwrap();

        let texts = FileSource::new(&path).fetch().unwrap();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].text, "Some text");
        assert_eq!(texts[0].kind, TextKind::Plain);
    }

    #[test]
    fn test_html_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.HTML");
        fs::write(&path, "<p>Hi</p>").unwrap();

        let texts = FileSource::new(&path).fetch().unwrap();
        assert_eq!(texts[0].kind, TextKind::Html);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.txt"));

        assert!(matches!(source.fetch(), Err(WordgapError::MissingFile { .. })));
    }
}
