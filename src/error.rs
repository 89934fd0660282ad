//! Error types for the wordgap library.
//!
//! All errors are represented by the [`WordgapError`] enum. The variants that
//! matter to callers of the vocabulary pipeline are:
//!
//! - [`WordgapError::MissingFile`] - a reference dictionary or input text file
//!   does not exist
//! - [`WordgapError::SourceUnavailable`] - a text source could not be reached
//! - [`WordgapError::EmptyKnownSet`] - a dictionary was required but loaded no words
//!
//! # Examples
//!
//! ```
//! use wordgap::error::{WordgapError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordgapError::missing_file("knowed-words.md"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for wordgap operations.
#[derive(Error, Debug)]
pub enum WordgapError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A reference dictionary or input text file does not exist.
    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A text source could not deliver its text (timeout, network failure, bad status).
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// The workflow requires known words but the dictionary produced none.
    #[error("No known words loaded from {}", path.display())]
    EmptyKnownSet { path: PathBuf },

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument or configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with WordgapError.
pub type Result<T> = std::result::Result<T, WordgapError>;

impl WordgapError {
    /// Create a new missing file error.
    pub fn missing_file<P: AsRef<Path>>(path: P) -> Self {
        WordgapError::MissingFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a new source unavailable error.
    pub fn source_unavailable<S: Into<String>>(msg: S) -> Self {
        WordgapError::SourceUnavailable(msg.into())
    }

    /// Create a new empty known set error.
    pub fn empty_known_set<P: AsRef<Path>>(path: P) -> Self {
        WordgapError::EmptyKnownSet {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordgapError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordgapError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordgapError::Other(msg.into())
    }

    /// Turn an I/O error raised while opening `path` into [`WordgapError::MissingFile`]
    /// when the file is absent.
    pub fn from_io_at<P: AsRef<Path>>(error: io::Error, path: P) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            WordgapError::missing_file(path)
        } else {
            WordgapError::Io(error)
        }
    }
}
