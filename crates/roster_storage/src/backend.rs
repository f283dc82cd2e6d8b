//! Storage backend trait definition.

use crate::error::StorageResult;
use std::path::{Path, PathBuf};

/// A whole-document storage backend.
///
/// Documents are addressed by path and always replaced in full.
///
/// # Invariants
///
/// - `read` returns exactly the bytes of the last successful `write`
/// - `read` of a path that was never written (or was removed) is `Ok(None)`
/// - `remove` reports whether a document was actually removed
/// - `write` is a plain overwrite; it is not atomic
pub trait StorageBackend: Send + Sync {
    /// Reads the whole document at `path`.
    ///
    /// Returns `Ok(None)` if no document exists there.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a regular file or an I/O error occurs.
    fn read(&self, path: &Path) -> StorageResult<Option<Vec<u8>>>;

    /// Replaces the document at `path` with `data`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn write(&mut self, path: &Path, data: &[u8]) -> StorageResult<()>;

    /// Removes the document at `path`.
    ///
    /// Returns `false` if there was nothing to remove.
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be removed.
    fn remove(&mut self, path: &Path) -> StorageResult<bool>;

    /// Returns whether a document exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined.
    fn exists(&self, path: &Path) -> StorageResult<bool>;

    /// Lists the documents directly inside `dir` whose extension is `extension`.
    ///
    /// The result is sorted. A missing directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list(&self, dir: &Path, extension: &str) -> StorageResult<Vec<PathBuf>>;
}
