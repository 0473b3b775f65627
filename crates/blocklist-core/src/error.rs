//! Error types for blocklist-core

/// Result type for blocklist-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in blocklist-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Remote feed failure reported by a [`FeedSource`](crate::FeedSource)
    /// implementation
    #[error("Ban feed unavailable: {message}")]
    FeedUnavailable { message: String },

    /// The feed was fetched but held no usable records; the run aborts
    /// before touching the existing blocklist
    #[error("Ban feed yielded no records; existing blocklist left untouched")]
    EmptyFeed,

    /// Filesystem error from blocklist-fs
    #[error(transparent)]
    Fs(#[from] blocklist_fs::Error),
}

impl Error {
    /// Wrap a feed collaborator failure.
    pub fn feed_unavailable(message: impl Into<String>) -> Self {
        Self::FeedUnavailable {
            message: message.into(),
        }
    }
}
