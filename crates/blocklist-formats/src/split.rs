//! First-delimiter splitting shared by the feed and blocklist parsers.

/// Split `line` on the first occurrence of `delim`, trimming both halves.
pub(crate) fn split_first(line: &str, delim: char) -> Option<(&str, &str)> {
    let (left, right) = line.split_once(delim)?;
    Some((left.trim(), right.trim()))
}

/// The value part of a `KEY = VALUE` line: everything after the first `=`
/// plus one more skipped character, so the `= ` pair acts as the delimiter.
///
/// Returns `None` when the line has no `=` or nothing follows it; the value
/// itself is not trimmed.
pub(crate) fn value_after_equals(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once('=')?;
    rest.get(1..)
}
