//! Blocking HTTP client for the published ban feed.

use std::time::Duration;

use tracing::debug;

use crate::error::{FetchError, Result};

const USER_AGENT: &str = concat!("blocklist-sync/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for fetching the raw ban feed.
pub struct FeedClient {
    url: String,
    http: reqwest::blocking::Client,
}

impl FeedClient {
    /// Build a client for the given feed endpoint.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            url: url.into(),
            http,
        })
    }

    /// The feed endpoint this client targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw feed body with a single unauthenticated GET.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success status codes, and an empty
    /// body.
    pub fn fetch(&self) -> Result<String> {
        debug!(url = %self.url, "requesting ban feed");
        let response = self.http.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.text()?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyFeed {
                url: self.url.clone(),
            });
        }

        debug!(bytes = body.len(), "received feed body");
        Ok(body)
    }
}

impl blocklist_core::FeedSource for FeedClient {
    fn fetch_raw(&self) -> blocklist_core::Result<String> {
        self.fetch()
            .map_err(|e| blocklist_core::Error::feed_unavailable(e.to_string()))
    }
}
