//! Parsing and writing for the ban-list text formats.
//!
//! Three formats cross this crate:
//!
//! - the remote comma-delimited ban feed (`feed`),
//! - the local nested key-value blocklist (`parser` / `writer`),
//! - the local newline-delimited allowlist (`allowlist`).
//!
//! All parsers are total: malformed input degrades to skipped lines or a
//! shorter record sequence, never to an error.

pub mod allowlist;
pub mod feed;
pub mod parser;
pub mod record;
pub mod writer;

mod split;

pub use allowlist::parse_allowlist;
pub use feed::{FeedParse, parse_feed};
pub use parser::parse_blocklist;
pub use record::BanRecord;
pub use writer::write_blocklist;
