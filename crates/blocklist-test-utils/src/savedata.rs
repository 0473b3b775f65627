//! [`TestSaveData`] builder for save-data test scenarios.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use blocklist_fs::SaveDataLayout;
use blocklist_fs::constants::{ALLOWLIST_FILE, BLOCKLIST_FILE};

/// A temporary save-data directory with helper methods for seeding and
/// reading the files the sync pipeline touches.
///
/// # Example
///
/// ```rust,no_run
/// use blocklist_test_utils::TestSaveData;
///
/// let savedata = TestSaveData::new();
/// savedata.write_allowlist(&["76561198000000001"]);
/// let layout = savedata.layout();
/// ```
pub struct TestSaveData {
    temp_dir: TempDir,
}

impl Default for TestSaveData {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSaveData {
    /// Create an empty temporary save-data directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Layout rooted at this directory.
    pub fn layout(&self) -> SaveDataLayout {
        SaveDataLayout::new(self.temp_dir.path())
    }

    /// Seed the blocklist file with raw text.
    pub fn write_blocklist(&self, content: &str) {
        fs::write(self.temp_dir.path().join(BLOCKLIST_FILE), content).unwrap();
    }

    /// Seed the allowlist file, one id per line.
    pub fn write_allowlist(&self, ids: &[&str]) {
        let mut content = ids.join("\n");
        content.push('\n');
        fs::write(self.temp_dir.path().join(ALLOWLIST_FILE), content).unwrap();
    }

    /// Whether the blocklist file exists.
    pub fn blocklist_exists(&self) -> bool {
        self.temp_dir.path().join(BLOCKLIST_FILE).exists()
    }

    /// Read the blocklist file back.
    pub fn read_blocklist(&self) -> String {
        fs::read_to_string(self.temp_dir.path().join(BLOCKLIST_FILE)).unwrap()
    }
}
