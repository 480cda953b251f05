//! Error types for jrp-templates

use std::path::PathBuf;

use crate::model::NoteTypeId;

/// Result type for note-type store and synchronization operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, synchronizing, or saving note types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Referenced note type does not exist in the store
    #[error("Note type {id} not found")]
    NoteTypeNotFound { id: NoteTypeId },

    /// Reading or writing the collection failed
    #[error("Storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection file does not hold a valid collection document
    #[error("Invalid collection at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The advisory lock on the collection file could not be acquired
    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}
