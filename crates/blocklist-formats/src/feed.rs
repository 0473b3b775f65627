//! Parser for the remote comma-delimited ban feed.
//!
//! One record per line, `id,name`, newline-terminated:
//!
//! ```text
//! 76561198000000001, Some Pilot
//! 76561198000000002, Another Pilot
//! ```

use tracing::warn;

use crate::record::BanRecord;
use crate::split::split_first;

/// Outcome of parsing a raw feed body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedParse {
    /// Records in feed order.
    pub records: Vec<BanRecord>,
    /// Lines dropped for having no comma or an empty id.
    pub skipped: usize,
}

/// Parse the raw feed body into ban records.
///
/// Every record line must be newline-terminated; a trailing fragment with
/// no terminator is ignored. Each line splits on its first comma into id
/// and name, both trimmed. A line with no comma or an empty id is dropped
/// and counted in [`FeedParse::skipped`]; blank lines are dropped silently.
///
/// An empty input yields an empty parse, not an error — callers decide
/// whether zero records is acceptable.
pub fn parse_feed(raw: &str) -> FeedParse {
    let mut parse = FeedParse::default();

    // Everything after the last newline is the unterminated tail.
    let Some((lines, _tail)) = raw.rsplit_once('\n') else {
        return parse;
    };

    for line in lines.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        match split_first(line, ',') {
            Some((id, name)) if !id.is_empty() => {
                parse.records.push(BanRecord::from_feed(id, name));
            }
            _ => {
                warn!(line, "skipping malformed feed line");
                parse.skipped += 1;
            }
        }
    }

    parse
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parse_two_records() {
        let parse = parse_feed("1,Alice\n2,Bob\n");
        assert_eq!(
            parse.records,
            vec![BanRecord::from_feed("1", "Alice"), BanRecord::from_feed("2", "Bob")]
        );
        assert_eq!(parse.skipped, 0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parse = parse_feed(" 1 ,  Alice  \n");
        assert_eq!(parse.records, vec![BanRecord::from_feed("1", "Alice")]);
    }

    #[test]
    fn test_feed_name_fills_both_fields() {
        let parse = parse_feed("1,Alice\n");
        assert_eq!(parse.records[0].pilot_name, "Alice");
        assert_eq!(parse.records[0].steam_name, "Alice");
    }

    #[test]
    fn test_name_keeps_later_commas() {
        let parse = parse_feed("1,Alice, the second\n");
        assert_eq!(parse.records[0].pilot_name, "Alice, the second");
    }

    #[test]
    fn test_unterminated_tail_ignored() {
        let parse = parse_feed("1,Alice\n2,Bob");
        assert_eq!(parse.records, vec![BanRecord::from_feed("1", "Alice")]);
    }

    #[rstest]
    #[case::empty("")]
    #[case::no_newline("1,Alice")]
    fn test_inputs_without_terminated_lines(#[case] raw: &str) {
        let parse = parse_feed(raw);
        assert!(parse.records.is_empty());
        assert_eq!(parse.skipped, 0);
    }

    #[rstest]
    #[case::no_comma("not a record\n")]
    #[case::empty_id(",Nameless\n")]
    #[case::whitespace_id("  ,Nameless\n")]
    fn test_malformed_lines_counted(#[case] raw: &str) {
        let parse = parse_feed(raw);
        assert!(parse.records.is_empty());
        assert_eq!(parse.skipped, 1);
    }

    #[test]
    fn test_blank_lines_skipped_silently() {
        let parse = parse_feed("1,Alice\n\n   \n2,Bob\n");
        assert_eq!(parse.records.len(), 2);
        assert_eq!(parse.skipped, 0);
    }

    #[test]
    fn test_malformed_lines_do_not_stop_parsing() {
        let parse = parse_feed("1,Alice\ngarbage\n2,Bob\n");
        assert_eq!(
            parse.records,
            vec![BanRecord::from_feed("1", "Alice"), BanRecord::from_feed("2", "Bob")]
        );
        assert_eq!(parse.skipped, 1);
    }
}
