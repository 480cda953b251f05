//! Error types for jrp-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the note-type store
    #[error(transparent)]
    Templates(#[from] jrp_templates::Error),

    /// Error loading preferences
    #[error(transparent)]
    Prefs(#[from] jrp_prefs::Error),

    /// JSON output serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
