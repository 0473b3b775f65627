//! Core orchestration for blocklist-sync
//!
//! Combines three sources of truth — the remote ban feed, the existing
//! local blocklist, and the user allowlist — under one precedence rule:
//! entries already in the local file always win, and remote entries are
//! appended unless allowlisted or already present.
//!
//! The pipeline is a one-shot batch run:
//!
//! ```text
//! FeedSource ─▶ parse_feed ──┐
//! blocklist.cfg ─▶ parse ────┼─▶ merge ─▶ write_blocklist ─▶ blocklist.cfg
//! allowlist.txt ─▶ parse ────┘
//! ```

pub mod error;
pub mod merge;
pub mod source;
pub mod sync;

pub use error::{Error, Result};
pub use merge::{MergeOutcome, merge};
pub use source::FeedSource;
pub use sync::{StatusReport, SyncEngine, SyncOptions, SyncReport, status};
