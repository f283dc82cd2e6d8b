//! Menu command implementations.
//!
//! Each command reports its own outcome. Core errors end the command, never
//! the menu loop; only console I/O errors propagate.

pub mod file;
pub mod record;

use roster_core::{CoreError, Record};
use std::io::{self, Write};
use tracing::debug;

/// Prints a failed operation.
pub(crate) fn report_error(out: &mut impl Write, action: &str, err: &CoreError) -> io::Result<()> {
    debug!(action, error = %err, "operation failed");
    writeln!(out, "[ERR] Could not {action}: {err}\n")
}

/// Prints records one per line.
pub(crate) fn print_records<'a>(
    out: &mut impl Write,
    records: impl IntoIterator<Item = &'a Record>,
) -> io::Result<()> {
    for record in records {
        writeln!(out, "  {record}")?;
    }
    Ok(())
}
