//! Constants for save-data file locations and the published ban feed.

/// Path segments from the platform data directory to the game save data.
pub const SAVE_DATA_SEGMENTS: [&str; 3] = ["Boundless Dynamics, LLC", "VTOLVR", "SaveData"];

/// File name of the game's blocklist.
pub const BLOCKLIST_FILE: &str = "blocklist.cfg";

/// File name of the user-maintained allowlist.
pub const ALLOWLIST_FILE: &str = "allowlist.txt";

/// Published ban feed endpoint.
pub const DEFAULT_FEED_URL: &str = "http://hs.vtolvr.live/api/v1/public/bannedraw";
