//! Report writing.
//!
//! Reports are always written from scratch: an existing file at the
//! destination is truncated.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vocabulary::diff::UnknownWord;

/// Title line of markdown table reports.
pub const TABLE_TITLE: &str = "# Unknown Words";

/// Shape of the report file.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One word per line
    List,
    /// Markdown table with a word and a frequency column
    Table,
    /// JSON array of `{ "word": ..., "count": ... }` objects
    Json,
}

/// Serializes unknown words in one [`ReportFormat`].
#[derive(Debug, Clone, Copy)]
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(format: ReportFormat) -> Self {
        ReportWriter { format }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Write `words` to any writer.
    pub fn write_to<W: Write>(&self, out: &mut W, words: &[UnknownWord]) -> Result<()> {
        match self.format {
            ReportFormat::List => {
                for entry in words {
                    writeln!(out, "{}", entry.word)?;
                }
            }
            ReportFormat::Table => {
                writeln!(out, "{TABLE_TITLE}")?;
                writeln!(out)?;
                writeln!(out, "| Word | Frequency |")?;
                writeln!(out, "|------|----------:|")?;
                for entry in words {
                    writeln!(out, "| {} | {} |", entry.word, entry.count)?;
                }
            }
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, words)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Render the report into a string.
    pub fn render(&self, words: &[UnknownWord]) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, words)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Create or truncate `path` and write the report to it (UTF-8).
    ///
    /// Missing parent directories are created. Returns the path written.
    pub fn write<P: AsRef<Path>>(&self, path: P, words: &[UnknownWord]) -> Result<PathBuf> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out, words)?;
        out.flush()?;

        info!("Wrote {} unknown words to {}", words.len(), path.display());
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<UnknownWord> {
        vec![UnknownWord::new("dog", 2), UnknownWord::new("barks", 1)]
    }

    #[test]
    fn test_render_list() {
        let out = ReportWriter::new(ReportFormat::List).render(&words()).unwrap();
        assert_eq!(out, "dog\nbarks\n");
    }

    #[test]
    fn test_render_table() {
        let out = ReportWriter::new(ReportFormat::Table).render(&words()).unwrap();
        assert_eq!(
            out,
            "# Unknown Words\n\n| Word | Frequency |\n|------|----------:|\n| dog | 2 |\n| barks | 1 |\n"
        );
    }

    #[test]
    fn test_render_json() {
        let out = ReportWriter::new(ReportFormat::Json).render(&words()).unwrap();
        let parsed: Vec<UnknownWord> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, words());
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(ReportWriter::new(ReportFormat::List).render(&[]).unwrap(), "");
        let table = ReportWriter::new(ReportFormat::Table).render(&[]).unwrap();
        assert!(table.ends_with("|------|----------:|\n"));
    }

    #[test]
    fn test_write_overwrites_and_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("unknown.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale\ncontent\nthat\nis\nlonger\n").unwrap();

        let writer = ReportWriter::new(ReportFormat::List);
        let written = writer.write(&path, &words()).unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "dog\nbarks\n");

        let nested = dir.path().join("a").join("b").join("report.md");
        writer.write(&nested, &words()).unwrap();
        assert!(nested.exists());
    }
}
