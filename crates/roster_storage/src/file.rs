//! File-based storage backend for persistent storage.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file-based storage backend.
///
/// Each document is one file on the host filesystem. Writes truncate and
/// rewrite the file in place.
///
/// # Durability
///
/// - `write()` always flushes to the OS
/// - with [`FileBackend::with_sync`] enabled it also calls `File::sync_all()`
///
/// # Example
///
/// ```no_run
/// use roster_storage::{FileBackend, StorageBackend};
/// use std::path::Path;
///
/// let mut backend = FileBackend::new().with_sync(true);
/// backend.write(Path::new("class.json"), b"[]").unwrap();
/// ```
#[derive(Debug, Default, Clone)]
pub struct FileBackend {
    sync_writes: bool,
}

impl FileBackend {
    /// Creates a file backend that does not fsync after writes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether every write is followed by `sync_all`.
    #[must_use]
    pub fn with_sync(mut self, sync_writes: bool) -> Self {
        self.sync_writes = sync_writes;
        self
    }

    /// Returns whether writes are synced to disk.
    #[must_use]
    pub fn syncs_writes(&self) -> bool {
        self.sync_writes
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, path: &Path) -> StorageResult<Option<Vec<u8>>> {
        if !path.exists() {
            return Ok(None);
        }
        if !path.is_file() {
            return Err(StorageError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let data = fs::read(path)?;
        debug!(path = %path.display(), bytes = data.len(), "read document");
        Ok(Some(data))
    }

    fn write(&mut self, path: &Path, data: &[u8]) -> StorageResult<()> {
        let mut file = File::create(path)?;
        file.write_all(data)?;
        file.flush()?;
        if self.sync_writes {
            file.sync_all()?;
        }

        debug!(path = %path.display(), bytes = data.len(), sync = self.sync_writes, "wrote document");
        Ok(())
    }

    fn remove(&mut self, path: &Path) -> StorageResult<bool> {
        if path.is_dir() {
            return Err(StorageError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, path: &Path) -> StorageResult<bool> {
        Ok(path.is_file())
    }

    fn list(&self, dir: &Path, extension: &str) -> StorageResult<Vec<PathBuf>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}
