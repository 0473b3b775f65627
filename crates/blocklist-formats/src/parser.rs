//! Parser for the nested key-value blocklist format.
//!
//! The file is a single root block holding one `USER` block per banned
//! identity at nesting level 2:
//!
//! ```text
//! NODE
//! {
//! 	USER
//! 	{
//! 		id = 76561198000000001
//! 		steamName = Some Pilot
//! 		pilotName = Some Pilot
//! 	}
//! }
//! ```

use crate::record::BanRecord;
use crate::split::value_after_equals;

/// Depth-tracking line reader for the block format.
///
/// A record is emitted whenever a `}` returns the depth to 1, i.e. when a
/// user block at level 2 closes under the root block.
struct BlockReader {
    depth: i32,
    steam_name: String,
    pilot_name: String,
    id: String,
    records: Vec<BanRecord>,
}

impl BlockReader {
    fn new() -> Self {
        Self {
            depth: 0,
            steam_name: String::new(),
            pilot_name: String::new(),
            id: String::new(),
            records: Vec::new(),
        }
    }

    fn feed_line(&mut self, line: &str) {
        // Keyword lines win over brace lines. `steamName` is checked before
        // `pilotName` and `id` so a line matching more than one keyword
        // resolves to the first.
        if line.contains("steamName") {
            if let Some(value) = value_after_equals(line) {
                self.steam_name = value.to_string();
            }
        } else if line.contains("pilotName") {
            if let Some(value) = value_after_equals(line) {
                self.pilot_name = value.to_string();
            }
        } else if line.contains("id") {
            if let Some(value) = value_after_equals(line) {
                self.id = value.to_string();
            }
        } else if line.contains('{') {
            self.depth += 1;
        } else if line.contains('}') {
            self.depth -= 1;
            if self.depth == 1 {
                self.emit();
            }
        }
    }

    // The accumulators are not reset here: a block missing a field
    // inherits the previous block's value. Well-formed files always
    // supply all three fields per block.
    fn emit(&mut self) {
        self.records.push(BanRecord {
            id: self.id.clone(),
            pilot_name: self.pilot_name.clone(),
            steam_name: self.steam_name.clone(),
        });
    }
}

/// Parse blocklist text into records.
///
/// Unbalanced braces are not validated; the parser yields whatever records
/// closed before the input ended and never fails.
pub fn parse_blocklist(text: &str) -> Vec<BanRecord> {
    let mut reader = BlockReader::new();
    for line in text.lines() {
        reader.feed_line(line);
    }
    reader.records
}
