//! Error types for blocklist-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from blocklist-core
    #[error(transparent)]
    Core(#[from] blocklist_core::Error),

    /// Error from blocklist-fs
    #[error(transparent)]
    Fs(#[from] blocklist_fs::Error),

    /// Error from the feed client
    #[error(transparent)]
    Fetch(#[from] blocklist_fetch::FetchError),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    #[allow(dead_code)]
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
