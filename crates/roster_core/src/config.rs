//! Roster configuration.

use crate::validate::{FieldLimits, DEFAULT_MAX_FIELD_LEN};
use std::path::PathBuf;

/// Configuration for a [`crate::Store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory that base names are resolved against.
    pub data_dir: PathBuf,

    /// Extension appended to every base name, without the dot.
    pub extension: String,

    /// Indentation width of persisted JSON, in spaces.
    pub indent: usize,

    /// Maximum length of name, course and year.
    pub max_field_len: usize,

    /// Whether to fsync after every save.
    pub sync_on_save: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            extension: "json".to_string(),
            indent: 4,
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            sync_on_save: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data directory.
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Sets the file extension. A leading dot is ignored.
    #[must_use]
    pub fn extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    /// Sets the JSON indentation width.
    #[must_use]
    pub const fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the maximum field length.
    #[must_use]
    pub const fn max_field_len(mut self, len: usize) -> Self {
        self.max_field_len = len;
        self
    }

    /// Sets whether saves are synced to disk.
    #[must_use]
    pub const fn sync_on_save(mut self, value: bool) -> Self {
        self.sync_on_save = value;
        self
    }

    /// Returns the field limits implied by this configuration.
    #[must_use]
    pub const fn limits(&self) -> FieldLimits {
        FieldLimits::new(self.max_field_len)
    }
}
