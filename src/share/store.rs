//! Share state persistence
//!
//! Snapshots are keyed by their state fingerprint. [`FileStore`] is the
//! disk-backed implementation: one pretty-printed JSON file per snapshot
//! under the configured share directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, state_read_failed, state_write_failed};
use crate::layout::AppLayout;

/// Persistence interface for shared app state
pub trait ShareStore {
    /// Save a snapshot under its fingerprint.
    ///
    /// Idempotent: returns `Ok(false)` when a snapshot with this fingerprint
    /// already exists, `Ok(true)` when it was written.
    fn save(&self, fingerprint: &str, state: &AppLayout) -> Result<bool>;

    /// Load the snapshot for a fingerprint, `None` when absent
    fn load(&self, fingerprint: &str) -> Result<Option<AppLayout>>;

    /// True when a snapshot with this fingerprint exists
    fn contains(&self, fingerprint: &str) -> Result<bool>;
}

/// File-backed share store: `<dir>/<fingerprint>.json`
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn snapshot_path(&self, fingerprint: &str) -> PathBuf {
        self.dir.join(format!("{fingerprint}.json"))
    }
}

impl ShareStore for FileStore {
    fn save(&self, fingerprint: &str, state: &AppLayout) -> Result<bool> {
        let path = self.snapshot_path(fingerprint);
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(&self.dir).map_err(|e| {
            state_write_failed(self.dir.display().to_string(), e.to_string())
        })?;

        let encoded = serde_json::to_vec_pretty(state)?;

        // Write to a temp file in the same directory, then persist, so a
        // concurrent load never sees a half-written snapshot.
        let mut temp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| state_write_failed(path.display().to_string(), e.to_string()))?;
        temp.write_all(&encoded)
            .map_err(|e| state_write_failed(path.display().to_string(), e.to_string()))?;
        temp.persist(&path)
            .map_err(|e| state_write_failed(path.display().to_string(), e.to_string()))?;

        Ok(true)
    }

    fn load(&self, fingerprint: &str) -> Result<Option<AppLayout>> {
        let path = self.snapshot_path(fingerprint);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(state_read_failed(path.display().to_string(), e.to_string()));
            }
        };

        let state = serde_json::from_str(&content)
            .map_err(|e| state_read_failed(path.display().to_string(), e.to_string()))?;
        Ok(Some(state))
    }

    fn contains(&self, fingerprint: &str) -> Result<bool> {
        Ok(self.snapshot_path(fingerprint).exists())
    }
}
