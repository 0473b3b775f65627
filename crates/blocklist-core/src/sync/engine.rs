//! SyncEngine implementation
//!
//! The SyncEngine coordinates one batch run: fetch the remote ban feed,
//! read local state, merge under the existing-wins policy, and rewrite the
//! blocklist file.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use blocklist_formats::{parse_allowlist, parse_blocklist, parse_feed, write_blocklist};
use blocklist_fs::SaveDataLayout;
use blocklist_fs::io::{read_optional_text, write_text};

use crate::error::{Error, Result};
use crate::merge::merge;
use crate::source::FeedSource;

/// Report from a sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Size of the fetched feed body in bytes.
    pub feed_bytes: usize,
    /// Records resolved from the feed.
    pub remote: usize,
    /// Malformed feed lines dropped during parsing.
    pub skipped_lines: usize,
    /// Records already in the local blocklist.
    pub existing: usize,
    /// Ids in the user allowlist.
    pub allowlist: usize,
    /// Remote records appended.
    pub added: usize,
    /// Remote records skipped as allowlisted.
    pub whitelisted: usize,
    /// Remote records skipped as already blocked.
    pub already_blocked: usize,
    /// Records in the final blocklist.
    pub total: usize,
    /// Whether the blocklist file was rewritten (false under dry-run).
    pub wrote_file: bool,
    /// Where the blocklist is (or would be) written.
    pub output_path: PathBuf,
}

/// Options for a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, compute and report the merge without touching the
    /// blocklist file.
    pub dry_run: bool,
}

/// Engine for one-shot blocklist synchronization.
pub struct SyncEngine {
    /// Resolved save-data location.
    layout: SaveDataLayout,
    /// Remote feed collaborator.
    feed: Box<dyn FeedSource>,
}

impl SyncEngine {
    /// Create a new SyncEngine over a resolved layout and feed source.
    pub fn new(layout: SaveDataLayout, feed: Box<dyn FeedSource>) -> Self {
        Self { layout, feed }
    }

    /// Run one fetch-merge-write cycle.
    ///
    /// Missing local files are treated as empty inputs, so a first run on
    /// a clean machine succeeds.
    ///
    /// # Errors
    ///
    /// Fails without writing when the feed is unreachable or yields no
    /// records; propagates any write failure.
    pub fn sync(&self, options: &SyncOptions) -> Result<SyncReport> {
        let raw = self.feed.fetch_raw()?;
        info!(bytes = raw.len(), "received ban feed");

        let feed = parse_feed(&raw);
        if feed.records.is_empty() {
            return Err(Error::EmptyFeed);
        }
        info!(
            remote = feed.records.len(),
            skipped = feed.skipped,
            "resolved banned users from feed"
        );

        let existing = match read_optional_text(&self.layout.blocklist_path())? {
            Some(text) => parse_blocklist(&text),
            None => {
                debug!("no existing blocklist");
                Vec::new()
            }
        };
        info!(existing = existing.len(), "read existing blocklist");

        let whitelist = match read_optional_text(&self.layout.allowlist_path())? {
            Some(text) => parse_allowlist(&text),
            None => {
                debug!("no user allowlist");
                HashSet::new()
            }
        };
        info!(allowlist = whitelist.len(), "read user allowlist");

        let outcome = merge(&feed.records, &existing, &whitelist);
        info!(total = outcome.records.len(), added = outcome.added, "merged final blocklist");

        let output_path = self.layout.blocklist_path();
        let wrote_file = if options.dry_run {
            false
        } else {
            write_text(&output_path, &write_blocklist(&outcome.records))?;
            true
        };

        Ok(SyncReport {
            feed_bytes: raw.len(),
            remote: feed.records.len(),
            skipped_lines: feed.skipped,
            existing: existing.len(),
            allowlist: whitelist.len(),
            added: outcome.added,
            whitelisted: outcome.whitelisted,
            already_blocked: outcome.already_blocked,
            total: outcome.records.len(),
            wrote_file,
            output_path,
        })
    }
}
