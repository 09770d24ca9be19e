use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::CountTable;
use crate::errors::{StorageError, StorageResult};

/// File-backed store for the count snapshot.
///
/// The snapshot is a pretty-printed JSON object with one key per category.
/// It is rewritten wholesale on every save.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the snapshot is staged in before being renamed into place
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Read the snapshot from disk
    pub fn load(&self) -> StorageResult<CountTable> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let table = serde_json::from_str::<CountTable>(&contents).map_err(|e| {
            StorageError::Parse {
                path: self.path.clone(),
                source: e,
            }
        })?;

        debug!("Loaded snapshot from {:?}, total {}", self.path, table.total());
        Ok(table)
    }

    /// Write the full table to disk.
    ///
    /// The JSON is written to a staging file and renamed over the target, so a
    /// crash mid-write leaves the previous snapshot intact.
    pub fn save(&self, table: &CountTable) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(table).map_err(StorageError::Serialize)?;

        let write_err = |source: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let staging = self.staging_path();
        fs::write(&staging, json).map_err(write_err)?;
        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(write_err(e));
        }

        info!("Snapshot saved to {:?}", self.path);
        Ok(())
    }
}
