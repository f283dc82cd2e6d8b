//! Test fixtures and store helpers.

use roster_core::{Config, Dataset, Record, RecordDetails, Store};
use roster_storage::{FileBackend, InMemoryBackend};
use std::path::Path;
use tempfile::TempDir;

/// A file-backed store rooted in a temporary directory.
pub struct TestStore {
    /// The store instance.
    pub store: Store<FileBackend>,
    /// The temporary directory (kept alive to prevent cleanup).
    temp_dir: TempDir,
}

impl TestStore {
    /// Creates a store over a fresh temporary directory.
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Creates a store over a fresh temporary directory.
    ///
    /// The data directory of `config` is replaced by the temporary one.
    pub fn with_config(config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = config.data_dir(temp_dir.path());
        let backend = FileBackend::new().with_sync(config.sync_on_save);
        Self {
            store: Store::new(backend, config),
            temp_dir,
        }
    }

    /// Returns the data directory.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TestStore {
    type Target = Store<FileBackend>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl std::ops::DerefMut for TestStore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.store
    }
}

/// Creates a store over an empty in-memory backend with default config.
pub fn memory_store() -> Store<InMemoryBackend> {
    Store::new(InMemoryBackend::new(), Config::default())
}

/// Runs `f` with a temporary file-backed store.
pub fn with_temp_store<F, R>(f: F) -> R
where
    F: FnOnce(&mut Store<FileBackend>) -> R,
{
    let mut fixture = TestStore::new();
    f(&mut fixture.store)
}

/// `{id: "1", name: "Alice", course: "CS", year: "2"}`.
pub fn alice() -> Record {
    Record::new("1", RecordDetails::new("Alice", "CS", "2"))
}

/// `{id: "2", name: "Bob", course: "EE", year: "3"}`.
pub fn bob() -> Record {
    Record::new("2", RecordDetails::new("Bob", "EE", "3"))
}

/// A dataset holding [`alice`] then [`bob`].
pub fn sample_dataset() -> Dataset {
    Dataset::from_records(vec![alice(), bob()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_store_is_isolated() {
        let mut fixture = TestStore::new();
        let path = fixture.resolve_filename("class");
        assert!(path.starts_with(fixture.dir()));

        fixture.save(&sample_dataset(), &path).unwrap();
        assert_eq!(fixture.list().unwrap(), ["class"]);
    }

    #[test]
    fn sync_setting_reaches_backend() {
        let fixture = TestStore::with_config(Config::new().sync_on_save(true));
        assert!(fixture.backend().syncs_writes());

        let fixture = TestStore::new();
        assert!(!fixture.backend().syncs_writes());
    }

    #[test]
    fn with_temp_store_runs() {
        let loaded = with_temp_store(|store| {
            let path = store.resolve_filename("x");
            store.load(&path).unwrap()
        });
        assert!(loaded.is_empty());
    }

    #[test]
    fn memory_store_starts_empty() {
        let store = memory_store();
        assert!(store.backend().is_empty());
    }
}
