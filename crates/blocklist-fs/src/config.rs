//! Optional user configuration for feed and save-data overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::io::read_optional_text;

/// User overrides loaded from `config.toml`.
///
/// Both fields are optional; an absent file resolves to all-defaults, so
/// the tool works with no setup at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Ban feed endpoint override.
    pub feed_url: Option<String>,
    /// Save-data directory override.
    pub save_data_dir: Option<PathBuf>,
}

impl SyncConfig {
    /// Load configuration from `path`, or defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the file exists but is not valid
    /// TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        match read_optional_text(path)? {
            Some(content) => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            None => Ok(Self::default()),
        }
    }

    /// Default location: `blocklist-sync/config.toml` under the platform
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("blocklist-sync").join("config.toml"))
    }
}
