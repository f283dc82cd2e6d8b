//! # Roster Storage
//!
//! Storage backends for roster datasets.
//!
//! Backends are **opaque document stores** keyed by path. Each document is
//! read and written whole; there is no append, seek, or partial update.
//! Backends do not interpret the bytes they hold.
//!
//! ## Available Backends
//!
//! - [`FileBackend`] - Persistent storage on the host filesystem
//! - [`InMemoryBackend`] - For tests and scripted sessions
//!
//! ## Example
//!
//! ```rust
//! use roster_storage::{InMemoryBackend, StorageBackend};
//! use std::path::Path;
//!
//! let mut backend = InMemoryBackend::new();
//! backend.write(Path::new("class.json"), b"[]").unwrap();
//! assert_eq!(backend.read(Path::new("class.json")).unwrap(), Some(b"[]".to_vec()));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
