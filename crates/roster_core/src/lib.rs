//! # Roster Core
//!
//! Record model and persistence for roster.
//!
//! This crate provides:
//! - [`Record`] and [`Dataset`], the in-memory ordered record list
//! - An input validation boundary ([`FieldLimits`], [`digits_only`])
//! - The JSON document codec
//! - [`Store`], which loads, saves and deletes datasets through a
//!   [`roster_storage::StorageBackend`]
//! - [`Session`], the explicit `{dataset, path}` context of an open file
//!
//! ## Example
//!
//! ```rust
//! use roster_core::{Config, RecordDetails, Session, Store};
//! use roster_storage::InMemoryBackend;
//!
//! let mut store = Store::new(InMemoryBackend::new(), Config::default());
//! let path = store.resolve_filename("class");
//!
//! let mut session = Session::new(path);
//! session.create("1", RecordDetails::new("Alice", "CS", "2"));
//! session.save(&mut store).unwrap();
//!
//! let reopened = Session::open(&store, session.path()).unwrap();
//! assert_eq!(reopened.dataset().len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
mod config;
mod dataset;
mod error;
mod record;
mod session;
mod store;
pub mod validate;

pub use codec::ExportEnvelope;
pub use config::Config;
pub use dataset::Dataset;
pub use error::{CoreError, CoreResult};
pub use record::{Record, RecordDetails};
pub use session::Session;
pub use store::Store;
pub use validate::{digits_only, Field, FieldLimits, ValidationError};
