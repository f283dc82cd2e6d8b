//! Dataset persistence.

use crate::codec::{self, ExportEnvelope};
use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{CoreError, CoreResult};
use roster_storage::StorageBackend;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loads, saves and deletes dataset files through a storage backend.
///
/// Whole files are read and written; there is no locking and no isolation
/// from other processes touching the same file.
#[derive(Debug)]
pub struct Store<B: StorageBackend> {
    backend: B,
    config: Config,
}

impl<B: StorageBackend> Store<B> {
    /// Creates a store over `backend`.
    pub fn new(backend: B, config: Config) -> Self {
        Self { backend, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the storage backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Maps a user-supplied base name to its file path.
    ///
    /// The name is used verbatim: separators and `..` are not rejected, and
    /// an extension the user already typed is not stripped.
    pub fn resolve_filename(&self, name: &str) -> PathBuf {
        self.config
            .data_dir
            .join(format!("{name}.{}", self.config.extension))
    }

    /// Returns whether a file exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot tell.
    pub fn exists(&self, path: &Path) -> CoreResult<bool> {
        Ok(self.backend.exists(path)?)
    }

    /// Loads the dataset at `path`. A missing file yields an empty dataset.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Malformed`] if the file does not parse, or a
    /// storage error if it cannot be read.
    pub fn load(&self, path: &Path) -> CoreResult<Dataset> {
        let Some(bytes) = self.backend.read(path)? else {
            debug!(path = %path.display(), "no file, starting empty");
            return Ok(Dataset::new());
        };

        let dataset = codec::decode(&bytes).map_err(|e| {
            warn!(path = %path.display(), error = %e, "malformed dataset file");
            CoreError::malformed(path, e)
        })?;

        info!(path = %path.display(), records = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Writes `dataset` to `path`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails. Encoding happens
    /// before the file is touched.
    pub fn save(&mut self, dataset: &Dataset, path: &Path) -> CoreResult<()> {
        let bytes = codec::encode(dataset, self.config.indent).map_err(CoreError::Encode)?;
        self.backend.write(path, &bytes)?;

        info!(path = %path.display(), records = dataset.len(), "saved dataset");
        Ok(())
    }

    /// Deletes the file at `path`.
    ///
    /// Returns `false` if there was no such file. No in-memory dataset is
    /// affected.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file exists but cannot be removed.
    pub fn delete(&mut self, path: &Path) -> CoreResult<bool> {
        let removed = self.backend.remove(path)?;
        if removed {
            info!(path = %path.display(), "deleted dataset file");
        } else {
            debug!(path = %path.display(), "nothing to delete");
        }
        Ok(removed)
    }

    /// Lists the base names of dataset files in the data directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be read.
    pub fn list(&self) -> CoreResult<Vec<String>> {
        let paths = self
            .backend
            .list(&self.config.data_dir, &self.config.extension)?;
        Ok(paths
            .iter()
            .filter_map(|p| p.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect())
    }

    /// Returns the export path that belongs to `path`: `<stem>_export.<ext>`.
    pub fn export_path(&self, path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!("{stem}_export.{}", self.config.extension))
    }

    /// Writes `dataset` wrapped in an [`ExportEnvelope`] next to `path`.
    ///
    /// Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn export(&mut self, dataset: &Dataset, path: &Path, exported_at: u64) -> CoreResult<PathBuf> {
        let envelope = ExportEnvelope::new(dataset, exported_at);
        let bytes = codec::encode_export(&envelope, self.config.indent).map_err(CoreError::Encode)?;

        let target = self.export_path(path);
        self.backend.write(&target, &bytes)?;

        info!(path = %target.display(), records = envelope.total_records, "exported dataset");
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordDetails;
    use roster_storage::{FileBackend, InMemoryBackend};
    use tempfile::tempdir;

    fn sample() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.create("1", RecordDetails::new("Alice", "CS", "2"));
        dataset.create("2", RecordDetails::new("Bob", "EE", "3"));
        dataset
    }

    #[test]
    fn resolve_appends_extension() {
        let store = Store::new(InMemoryBackend::new(), Config::new().data_dir("data"));
        assert_eq!(store.resolve_filename("class"), PathBuf::from("data/class.json"));
        assert_eq!(
            store.resolve_filename("class.json"),
            PathBuf::from("data/class.json.json")
        );
        assert_eq!(
            store.resolve_filename("../up"),
            PathBuf::from("data/../up.json")
        );
    }

    #[test]
    fn load_missing_is_empty() {
        let store = Store::new(InMemoryBackend::new(), Config::default());
        let path = store.resolve_filename("absent");

        assert!(store.load(&path).unwrap().is_empty());
        assert!(!store.exists(&path).unwrap());
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let mut store = Store::new(FileBackend::new(), Config::new().data_dir(dir.path()));
        let path = store.resolve_filename("class");

        store.save(&sample(), &path).unwrap();
        assert!(store.exists(&path).unwrap());
        assert_eq!(store.load(&path).unwrap(), sample());
    }

    #[test]
    fn load_malformed() {
        let backend = InMemoryBackend::with_document("./bad.json", b"{\"id\": ".to_vec());
        let store = Store::new(backend, Config::default());

        let err = store.load(&store.resolve_filename("bad")).unwrap_err();
        assert!(matches!(err, CoreError::Malformed { .. }));
    }

    #[test]
    fn delete_reports_absence() {
        let mut store = Store::new(InMemoryBackend::new(), Config::default());
        let path = store.resolve_filename("class");

        assert!(!store.delete(&path).unwrap());
        store.save(&Dataset::new(), &path).unwrap();
        assert!(store.delete(&path).unwrap());
        assert!(!store.exists(&path).unwrap());
    }

    #[test]
    fn list_base_names() {
        let dir = tempdir().unwrap();
        let mut store = Store::new(FileBackend::new(), Config::new().data_dir(dir.path()));
        for name in ["zeta", "alpha"] {
            let path = store.resolve_filename(name);
            store.save(&Dataset::new(), &path).unwrap();
        }
        std::fs::write(dir.path().join("readme.txt"), "x").unwrap();

        assert_eq!(store.list().unwrap(), ["alpha", "zeta"]);
    }

    #[test]
    fn export_writes_envelope() {
        let mut store = Store::new(InMemoryBackend::new(), Config::default());
        let path = store.resolve_filename("class");

        let target = store.export(&sample(), &path, 1_700_000_000).unwrap();
        assert_eq!(target, PathBuf::from("./class_export.json"));

        let bytes = store.backend().read(&target).unwrap().unwrap();
        let envelope: ExportEnvelope = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.exported_at, 1_700_000_000);
        assert_eq!(envelope.total_records, 2);

        assert_eq!(store.load(&target).unwrap(), sample());
        assert!(!store.exists(&path).unwrap());
    }
}
