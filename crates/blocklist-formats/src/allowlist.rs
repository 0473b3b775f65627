//! Parser for the newline-delimited allowlist.

use std::collections::HashSet;

/// Parse allowlist text into a set of exempt ids.
///
/// One id per line, trimmed; blank lines produce no entries. Duplicates
/// collapse harmlessly into the set.
pub fn parse_allowlist(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
