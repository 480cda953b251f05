//! Error types for jrp-prefs

use std::path::PathBuf;

/// Result type for preference operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading preferences
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read preferences at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),
}
