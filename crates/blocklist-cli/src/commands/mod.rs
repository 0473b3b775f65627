//! Command implementations

mod status;
mod sync;

use std::path::PathBuf;

use blocklist_fs::{SaveDataLayout, SyncConfig};

use crate::error::Result;

pub use status::run_status;
pub use sync::{SyncArgs, run_sync};

/// Load the optional user config from its default location.
pub(crate) fn load_config() -> Result<SyncConfig> {
    match SyncConfig::default_path() {
        Some(path) => Ok(SyncConfig::load(&path)?),
        None => Ok(SyncConfig::default()),
    }
}

/// Resolve the save-data layout: flag > config file > platform default.
pub(crate) fn resolve_layout(
    flag: Option<PathBuf>,
    config: &SyncConfig,
) -> Result<SaveDataLayout> {
    if let Some(dir) = flag {
        return Ok(SaveDataLayout::new(dir));
    }
    if let Some(dir) = &config.save_data_dir {
        return Ok(SaveDataLayout::new(dir.clone()));
    }
    Ok(SaveDataLayout::resolve_default()?)
}
