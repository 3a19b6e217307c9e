// Rust guideline compliant 2026-10-16

//! Error types for the hookkit core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hookkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for hookkit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO error tied to a specific file.
    #[error("IO error on {path}: {source}")]
    File {
        /// File being read or written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("File is not valid UTF-8: {0}")]
    Encoding(PathBuf),

    /// File path cannot be written on a single header line.
    #[error("File path contains a line break: {0:?}")]
    UnsafeName(PathBuf),

    /// Git query failed.
    #[error("Git error: {0}")]
    Git(String),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    Config(String),
}

impl From<git2::Error> for Error {
    fn from(err: git2::Error) -> Self {
        Error::Git(err.message().to_string())
    }
}
