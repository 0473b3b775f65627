//! Filesystem layer for blocklist-sync
//!
//! Resolves the game save-data location and provides safe I/O for the
//! files inside it. Path lookup is a resolved value handed to callers;
//! nothing below this crate reads the environment.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod layout;

pub use config::SyncConfig;
pub use error::{Error, Result};
pub use layout::SaveDataLayout;
