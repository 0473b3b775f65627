//! Read-only inspection of the local files.

use serde::Serialize;

use blocklist_formats::{parse_allowlist, parse_blocklist};
use blocklist_fs::SaveDataLayout;
use blocklist_fs::io::read_optional_text;

use crate::error::Result;

/// Counts of the local blocklist and allowlist.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub blocklist_present: bool,
    pub blocked: usize,
    pub allowlist_present: bool,
    pub allowlisted: usize,
}

/// Inspect the local files without fetching or writing anything.
///
/// # Errors
///
/// Fails only on unreadable files; absent files report as not present.
pub fn status(layout: &SaveDataLayout) -> Result<StatusReport> {
    let blocklist = read_optional_text(&layout.blocklist_path())?;
    let allowlist = read_optional_text(&layout.allowlist_path())?;

    Ok(StatusReport {
        blocklist_present: blocklist.is_some(),
        blocked: blocklist.map_or(0, |text| parse_blocklist(&text).len()),
        allowlist_present: allowlist.is_some(),
        allowlisted: allowlist.map_or(0, |text| parse_allowlist(&text).len()),
    })
}
