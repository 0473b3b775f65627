//! Test fixtures shared across blocklist-sync crates.

pub mod savedata;

pub use savedata::TestSaveData;
