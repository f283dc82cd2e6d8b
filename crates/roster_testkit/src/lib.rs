//! # Roster Testkit
//!
//! Test utilities for roster.
//!
//! This crate provides:
//! - Fixtures: temp-dir backed stores and sample records
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use roster_testkit::prelude::*;
//!
//! let mut fixture = TestStore::new();
//! let path = fixture.store.resolve_filename("class");
//! fixture.store.save(&sample_dataset(), &path).unwrap();
//! assert!(path.exists());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
