//! Writer for the nested key-value blocklist format.

use std::fmt::Write;

use crate::record::BanRecord;

/// Serialize records into blocklist text.
///
/// One `USER` block per record in sequence order, tab-indented, with no
/// trailing newline after the final brace. The output parses back to an
/// equal record sequence via [`parse_blocklist`](crate::parse_blocklist).
pub fn write_blocklist(records: &[BanRecord]) -> String {
    let mut out = String::from("NODE\n{\n");

    for record in records {
        out.push_str("\tUSER\n\t{\n");
        let _ = writeln!(out, "\t\tid = {}", record.id);
        let _ = writeln!(out, "\t\tsteamName = {}", record.steam_name);
        let _ = writeln!(out, "\t\tpilotName = {}", record.pilot_name);
        out.push_str("\t}\n");
    }

    out.push('}');
    out
}
