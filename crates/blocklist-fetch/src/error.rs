//! Error types for blocklist-fetch

/// Result type for blocklist-fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching the ban feed
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure from the HTTP client
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The feed endpoint answered with a non-success status
    #[error("Feed request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The feed endpoint answered with an empty body
    #[error("Feed at {url} returned an empty body")]
    EmptyFeed { url: String },
}
