//! The open-file context threaded through the record menu.

use crate::dataset::Dataset;
use crate::error::CoreResult;
use crate::record::{Record, RecordDetails};
use crate::store::Store;
use roster_storage::StorageBackend;
use std::path::{Path, PathBuf};

/// A dataset together with the file it is saved to.
///
/// Record operations only change memory and mark the session dirty.
/// Nothing reaches disk until [`Session::save`]. Dropping a dirty session
/// discards its edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    dataset: Dataset,
    path: PathBuf,
    dirty: bool,
}

impl Session {
    /// Starts an empty session for `path`. The file is not created.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_dataset(path, Dataset::new())
    }

    /// Starts a clean session over an existing dataset.
    pub fn with_dataset(path: impl Into<PathBuf>, dataset: Dataset) -> Self {
        Self {
            dataset,
            path: path.into(),
            dirty: false,
        }
    }

    /// Loads `path` through `store`. A missing file gives an empty session.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open<B: StorageBackend>(store: &Store<B>, path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let dataset = store.load(&path)?;
        Ok(Self::with_dataset(path, dataset))
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns true if there are edits not yet saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Appends a record. See [`Dataset::create`].
    pub fn create(&mut self, raw_id: &str, details: RecordDetails) -> &Record {
        self.dirty = true;
        self.dataset.create(raw_id, details)
    }

    /// Updates the first record with `target_id`. See [`Dataset::update`].
    ///
    /// # Errors
    ///
    /// Returns a not-found error; the session stays clean in that case.
    pub fn update(&mut self, target_id: &str, details: RecordDetails) -> CoreResult<&Record> {
        let record = self.dataset.update(target_id, details)?;
        self.dirty = true;
        Ok(record)
    }

    /// Deletes the first record with `target_id`. See [`Dataset::delete`].
    ///
    /// # Errors
    ///
    /// Returns a not-found error; the session stays clean in that case.
    pub fn delete(&mut self, target_id: &str) -> CoreResult<Record> {
        let record = self.dataset.delete(target_id)?;
        self.dirty = true;
        Ok(record)
    }

    /// Searches id and name. See [`Dataset::search`].
    pub fn search(&self, keyword: &str) -> Vec<&Record> {
        self.dataset.search(keyword)
    }

    /// Writes the dataset to the session path and clears the dirty flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails; the session stays dirty.
    pub fn save<B: StorageBackend>(&mut self, store: &mut Store<B>) -> CoreResult<()> {
        store.save(&self.dataset, &self.path)?;
        self.dirty = false;
        Ok(())
    }

    /// Exports the dataset next to the session path. See [`Store::export`].
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn export<B: StorageBackend>(&self, store: &mut Store<B>, exported_at: u64) -> CoreResult<PathBuf> {
        store.export(&self.dataset, &self.path, exported_at)
    }
}
