//! Error types for the journal crate.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors from journal operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("entry not found at index {0}")]
    EntryNotFound(usize),

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("entry source unavailable: {0}")]
    SourceUnavailable(String),
}

/// Result type for journal operations.
pub type Result<T> = std::result::Result<T, Error>;
