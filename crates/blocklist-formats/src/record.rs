//! The ban record shared by every format in this crate.

/// A single banned identity.
///
/// `id` is the unique key; comparisons are exact and case-sensitive.
/// Records parsed from the remote feed carry the same value in
/// `pilot_name` and `steam_name` because the feed only has one name column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanRecord {
    pub id: String,
    pub pilot_name: String,
    pub steam_name: String,
}

impl BanRecord {
    /// Build a record from a feed line, where one name fills both fields.
    pub fn from_feed(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            pilot_name: name.clone(),
            steam_name: name,
        }
    }
}
