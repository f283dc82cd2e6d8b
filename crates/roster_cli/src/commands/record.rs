//! Record menu commands.
//!
//! All of these work on the session in memory. Only `save` and `export`
//! touch storage.

use super::{print_records, report_error};
use crate::prompt::Prompt;
use roster_core::{CoreError, FieldLimits, RecordDetails, Session, Store};
use roster_storage::StorageBackend;
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

/// Asks for name, course and year and validates them.
///
/// Returns `Ok(None)` at end of input.
fn ask_details<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    limits: FieldLimits,
    prefix: &str,
) -> io::Result<Option<Result<RecordDetails, CoreError>>> {
    let Some(name) = prompt.ask(&format!("Enter {prefix}Name: "))? else {
        return Ok(None);
    };
    let Some(course) = prompt.ask(&format!("Enter {prefix}Course: "))? else {
        return Ok(None);
    };
    let Some(year) = prompt.ask(&format!("Enter {prefix}Year: "))? else {
        return Ok(None);
    };
    Ok(Some(
        limits.details(&name, &course, &year).map_err(CoreError::from),
    ))
}

/// Adds a record built from console input.
pub fn create<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &mut Session,
    limits: FieldLimits,
) -> io::Result<()> {
    let Some(raw_id) = prompt.ask("Enter ID (numbers only): ")? else {
        return Ok(());
    };
    let details = match ask_details(prompt, limits, "")? {
        None => return Ok(()),
        Some(Ok(details)) => details,
        Some(Err(e)) => return report_error(prompt.out(), "add record", &e),
    };

    let record = session.create(&raw_id, details);
    let empty_id = record.id.is_empty();
    let out = prompt.out();
    if empty_id {
        writeln!(out, "[!] ID has no digits; record stored with an empty ID.")?;
    }
    writeln!(out, "[OK] Record added.\n")
}

/// Replaces name, course and year of the first record with the given id.
pub fn update<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &mut Session,
    limits: FieldLimits,
) -> io::Result<()> {
    let Some(target) = prompt.ask("Enter ID to update: ")? else {
        return Ok(());
    };
    if session.dataset().find(&target).is_none() {
        return writeln!(prompt.out(), "[ERR] ID not found.\n");
    }

    let details = match ask_details(prompt, limits, "new ")? {
        None => return Ok(()),
        Some(Ok(details)) => details,
        Some(Err(e)) => return report_error(prompt.out(), "update record", &e),
    };

    match session.update(&target, details) {
        Ok(_) => writeln!(prompt.out(), "[OK] Record updated.\n"),
        Err(e) if e.is_not_found() => writeln!(prompt.out(), "[ERR] ID not found.\n"),
        Err(e) => report_error(prompt.out(), "update record", &e),
    }
}

/// Removes the first record with the given id.
pub fn delete<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    session: &mut Session,
) -> io::Result<()> {
    let Some(target) = prompt.ask("Enter ID to delete: ")? else {
        return Ok(());
    };

    match session.delete(&target) {
        Ok(_) => writeln!(prompt.out(), "[OK] Record deleted.\n"),
        Err(e) if e.is_not_found() => writeln!(prompt.out(), "[ERR] ID not found.\n"),
        Err(e) => report_error(prompt.out(), "delete record", &e),
    }
}

/// Prints every record whose id or name contains the keyword.
pub fn search<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, session: &Session) -> io::Result<()> {
    let Some(keyword) = prompt.ask("Enter ID or Name to search: ")? else {
        return Ok(());
    };

    let matches = session.search(&keyword);
    let out = prompt.out();
    if matches.is_empty() {
        return writeln!(out, "[ERR] No matching records found.\n");
    }
    writeln!(out, "[*] {} match(es):", matches.len())?;
    print_records(out, matches)?;
    writeln!(out)
}

/// Prints the whole dataset.
pub fn list<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, session: &Session) -> io::Result<()> {
    let out = prompt.out();
    let dataset = session.dataset();
    if dataset.is_empty() {
        return writeln!(out, "[*] No records.\n");
    }
    writeln!(out, "[*] {} record(s):", dataset.len())?;
    print_records(out, dataset)?;
    writeln!(out)
}

/// Writes the dataset to its file.
pub fn save<B, R, W>(
    prompt: &mut Prompt<R, W>,
    session: &mut Session,
    store: &mut Store<B>,
) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    match session.save(store) {
        Ok(()) => writeln!(
            prompt.out(),
            "[OK] Data saved to {}.\n",
            session.path().display()
        ),
        Err(e) => report_error(prompt.out(), "save data", &e),
    }
}

/// Writes an export file next to the dataset file.
pub fn export<B, R, W>(
    prompt: &mut Prompt<R, W>,
    session: &Session,
    store: &mut Store<B>,
) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    match session.export(store, unix_now()) {
        Ok(target) => writeln!(
            prompt.out(),
            "[OK] Exported {} record(s) to {}.\n",
            session.dataset().len(),
            target.display()
        ),
        Err(e) => report_error(prompt.out(), "export data", &e),
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
