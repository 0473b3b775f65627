//! Remote feed client for blocklist-sync
//!
//! One blocking GET against the published ban feed; the body is handed to
//! the core pipeline untouched.

pub mod client;
pub mod error;

pub use client::FeedClient;
pub use error::{FetchError, Result};
