//! Seam between the sync pipeline and the remote feed collaborator.

use crate::error::Result;

/// Source of the raw remote ban feed.
///
/// The pipeline consumes only the returned body; endpoints, transport, and
/// timeouts belong to the implementation. Tests substitute an in-memory
/// source.
pub trait FeedSource {
    /// Fetch the raw feed body.
    ///
    /// # Errors
    ///
    /// Implementations report any transport or protocol failure as
    /// [`Error::FeedUnavailable`](crate::Error::FeedUnavailable).
    fn fetch_raw(&self) -> Result<String>;
}
