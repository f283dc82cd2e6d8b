//! Roster CLI
//!
//! The interactive menus behind the `roster` binary, generic over the
//! input/output streams and the storage backend so they can be driven by
//! scripted input in tests.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod app;
pub mod commands;
pub mod menu;
pub mod prompt;

pub use app::{App, State};
pub use prompt::Prompt;
