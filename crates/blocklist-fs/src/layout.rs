//! Save-data layout and path resolution.

use std::path::{Path, PathBuf};

use crate::constants::{ALLOWLIST_FILE, BLOCKLIST_FILE, SAVE_DATA_SEGMENTS};
use crate::error::{Error, Result};

/// A resolved save-data directory with accessors for the files inside it.
///
/// The directory is injected as a value; callers decide whether it comes
/// from the platform default, a config file, or a command-line override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDataLayout {
    root: PathBuf,
}

impl SaveDataLayout {
    /// Layout rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at the game's save-data directory under the platform
    /// data dir (`%APPDATA%` on Windows, `~/.local/share` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataDirUnavailable`] if the platform reports no
    /// data directory.
    pub fn resolve_default() -> Result<Self> {
        let mut root = dirs::data_dir().ok_or(Error::DataDirUnavailable)?;
        for segment in SAVE_DATA_SEGMENTS {
            root.push(segment);
        }
        Ok(Self { root })
    }

    /// The save-data directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the game's blocklist file.
    pub fn blocklist_path(&self) -> PathBuf {
        self.root.join(BLOCKLIST_FILE)
    }

    /// Path of the user allowlist file.
    pub fn allowlist_path(&self) -> PathBuf {
        self.root.join(ALLOWLIST_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_root() {
        let layout = SaveDataLayout::new("/tmp/savedata");
        assert_eq!(layout.blocklist_path(), PathBuf::from("/tmp/savedata/blocklist.cfg"));
        assert_eq!(layout.allowlist_path(), PathBuf::from("/tmp/savedata/allowlist.txt"));
    }

    #[test]
    fn test_default_ends_with_game_segments() {
        if let Ok(layout) = SaveDataLayout::resolve_default() {
            assert!(layout.root().ends_with("Boundless Dynamics, LLC/VTOLVR/SaveData"));
        }
    }
}
