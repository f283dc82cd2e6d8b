//! File menu commands.

use super::report_error;
use crate::app::State;
use crate::prompt::Prompt;
use roster_core::{Session, Store};
use roster_storage::StorageBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn ask_path<B, R, W>(prompt: &mut Prompt<R, W>, store: &Store<B>) -> io::Result<Option<PathBuf>>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let label = format!("Enter filename (without .{}): ", store.config().extension);
    Ok(prompt
        .ask(&label)?
        .map(|name| store.resolve_filename(name.trim())))
}

/// Starts an empty dataset for a named file. Nothing is written yet.
pub fn create_new<B, R, W>(prompt: &mut Prompt<R, W>, store: &Store<B>) -> io::Result<State>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let Some(path) = ask_path(prompt, store)? else {
        return Ok(State::FileMenu);
    };

    let out = prompt.out();
    match store.exists(&path) {
        Ok(true) => writeln!(
            out,
            "[!] {} already exists; saving will overwrite it.",
            path.display()
        )?,
        Ok(false) => {}
        Err(e) => report_error(out, "check for an existing file", &e)?,
    }
    writeln!(out, "[OK] Created new file: {}\n", path.display())?;
    Ok(State::RecordMenu(Session::new(path)))
}

/// Loads a named file. A missing file opens as an empty dataset.
pub fn load<B, R, W>(prompt: &mut Prompt<R, W>, store: &Store<B>) -> io::Result<State>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let Some(path) = ask_path(prompt, store)? else {
        return Ok(State::FileMenu);
    };

    let out = prompt.out();
    let existed = match store.exists(&path) {
        Ok(existed) => existed,
        Err(e) => {
            report_error(out, "load file", &e)?;
            return Ok(State::FileMenu);
        }
    };

    match Session::open(store, &path) {
        Ok(session) => {
            if !existed {
                writeln!(
                    out,
                    "[!] {} not found, starting with an empty dataset.",
                    path.display()
                )?;
            }
            writeln!(
                out,
                "[OK] Loaded {} record(s) from {}\n",
                session.dataset().len(),
                path.display()
            )?;
            Ok(State::RecordMenu(session))
        }
        Err(e) => {
            report_error(out, "load file", &e)?;
            Ok(State::FileMenu)
        }
    }
}

/// Deletes a named file from disk.
pub fn delete_file<B, R, W>(prompt: &mut Prompt<R, W>, store: &mut Store<B>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let Some(path) = ask_path(prompt, store)? else {
        return Ok(());
    };

    let out = prompt.out();
    match store.delete(&path) {
        Ok(true) => writeln!(out, "[OK] File '{}' deleted.\n", path.display()),
        Ok(false) => writeln!(out, "[ERR] File '{}' not found.\n", path.display()),
        Err(e) => report_error(out, "delete file", &e),
    }
}

/// Lists dataset files in the data directory.
pub fn list_files<B, R, W>(prompt: &mut Prompt<R, W>, store: &Store<B>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let out = prompt.out();
    let dir = store.config().data_dir.display();
    match store.list() {
        Ok(names) if names.is_empty() => writeln!(out, "[*] No dataset files in {dir}\n"),
        Ok(names) => {
            writeln!(out, "[*] Dataset files in {dir}:")?;
            for name in names {
                writeln!(out, "  {name}")?;
            }
            writeln!(out)
        }
        Err(e) => report_error(out, "list files", &e),
    }
}
