//! In-memory storage backend for testing.

use crate::backend::StorageBackend;
use crate::error::StorageResult;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// An in-memory storage backend.
///
/// Documents live in a map keyed by path. Suitable for:
/// - Unit tests
/// - Scripted menu sessions that must not touch the filesystem
///
/// # Example
///
/// ```rust
/// use roster_storage::{InMemoryBackend, StorageBackend};
/// use std::path::Path;
///
/// let mut backend = InMemoryBackend::new();
/// backend.write(Path::new("a.json"), b"[]").unwrap();
/// assert!(backend.remove(Path::new("a.json")).unwrap());
/// assert!(!backend.remove(Path::new("a.json")).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    documents: RwLock<BTreeMap<PathBuf, Vec<u8>>>,
}

impl InMemoryBackend {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend holding one pre-existing document.
    ///
    /// Useful for testing load paths, including malformed content.
    #[must_use]
    pub fn with_document(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        let backend = Self::new();
        backend.documents.write().insert(path.into(), data);
        backend
    }

    /// Returns the number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Returns true if no documents are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl StorageBackend for InMemoryBackend {
    fn read(&self, path: &Path) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.documents.read().get(path).cloned())
    }

    fn write(&mut self, path: &Path, data: &[u8]) -> StorageResult<()> {
        self.documents
            .write()
            .insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }

    fn remove(&mut self, path: &Path) -> StorageResult<bool> {
        Ok(self.documents.write().remove(path).is_some())
    }

    fn exists(&self, path: &Path) -> StorageResult<bool> {
        Ok(self.documents.read().contains_key(path))
    }

    fn list(&self, dir: &Path, extension: &str) -> StorageResult<Vec<PathBuf>> {
        // BTreeMap keys are already sorted
        Ok(self
            .documents
            .read()
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter(|path| path.extension().is_some_and(|ext| ext == extension))
            .cloned()
            .collect())
    }
}
