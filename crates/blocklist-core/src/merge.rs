//! Merge policy for combining the remote feed with local state.

use std::collections::HashSet;

use tracing::info;

use blocklist_formats::BanRecord;

/// Result of merging the remote feed into the existing blocklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Final records: existing entries first in file order, then newly
    /// admitted remote entries in feed order.
    pub records: Vec<BanRecord>,
    /// Remote entries appended.
    pub added: usize,
    /// Remote entries skipped because the user allowlisted them.
    pub whitelisted: usize,
    /// Remote entries skipped because the id was already blocked.
    pub already_blocked: usize,
}

/// Merge `remote` into `existing`, honoring `whitelist`.
///
/// Existing entries always win: they keep their position and their names,
/// and a remote record with a known id is dropped rather than overwriting
/// them. Nothing is ever removed from `existing`, allowlisted or not.
pub fn merge(
    remote: &[BanRecord],
    existing: &[BanRecord],
    whitelist: &HashSet<String>,
) -> MergeOutcome {
    let mut outcome = MergeOutcome {
        records: existing.to_vec(),
        ..MergeOutcome::default()
    };

    // Id membership over the growing result, seeded from the existing list
    let mut blocked_ids: HashSet<&str> = existing.iter().map(|r| r.id.as_str()).collect();

    for record in remote {
        if whitelist.contains(&record.id) {
            info!(id = %record.id, name = %record.pilot_name, "user is allowlisted, not blocking");
            outcome.whitelisted += 1;
        } else if blocked_ids.contains(record.id.as_str()) {
            outcome.already_blocked += 1;
        } else {
            blocked_ids.insert(record.id.as_str());
            outcome.records.push(record.clone());
            outcome.added += 1;
        }
    }

    outcome
}
