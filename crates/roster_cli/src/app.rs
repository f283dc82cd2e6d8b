//! The two nested menus as an explicit state machine.
//!
//! ```text
//! FileMenu --new/load--> RecordMenu(session)
//! FileMenu --delete/list/invalid--> FileMenu
//! FileMenu --exit/EOF--> Exit
//! RecordMenu --record op/save/invalid--> RecordMenu
//! RecordMenu --back/EOF--> FileMenu   (unsaved edits are dropped)
//! ```

use crate::commands::{file, record};
use crate::menu::{render_file_menu, render_record_menu, FileChoice, RecordChoice};
use crate::prompt::Prompt;
use roster_core::{Session, Store};
use roster_storage::StorageBackend;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Where the menu loop is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Choosing, creating or deleting a file.
    FileMenu,
    /// Editing the dataset of an open file.
    RecordMenu(Session),
    /// Terminal state.
    Exit,
}

/// The interactive application.
#[derive(Debug)]
pub struct App<B: StorageBackend, R, W> {
    store: Store<B>,
    prompt: Prompt<R, W>,
}

impl<B, R, W> App<B, R, W>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    /// Creates the application.
    pub fn new(store: Store<B>, prompt: Prompt<R, W>) -> Self {
        Self { store, prompt }
    }

    /// Returns the store.
    pub fn store(&self) -> &Store<B> {
        &self.store
    }

    /// Returns the prompt.
    pub fn prompt(&self) -> &Prompt<R, W> {
        &self.prompt
    }

    /// Runs the menus until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if console I/O fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = State::FileMenu;
        loop {
            state = match state {
                State::FileMenu => self.file_menu()?,
                State::RecordMenu(session) => self.record_menu(session)?,
                State::Exit => {
                    info!("session ended");
                    return Ok(());
                }
            };
        }
    }

    /// Shows the file menu once and handles one selection.
    ///
    /// # Errors
    ///
    /// Returns an error only if console I/O fails.
    pub fn file_menu(&mut self) -> io::Result<State> {
        render_file_menu(self.prompt.out())?;
        let Some(input) = self.prompt.ask("Choose an option (1-5): ")? else {
            writeln!(self.prompt.out(), "Exiting program...")?;
            return Ok(State::Exit);
        };

        let Some(choice) = FileChoice::parse(&input) else {
            writeln!(self.prompt.out(), "[ERR] Invalid choice.\n")?;
            return Ok(State::FileMenu);
        };
        debug!(?choice, "file menu");

        match choice {
            FileChoice::New => file::create_new(&mut self.prompt, &self.store),
            FileChoice::Load => file::load(&mut self.prompt, &self.store),
            FileChoice::DeleteFile => {
                file::delete_file(&mut self.prompt, &mut self.store)?;
                Ok(State::FileMenu)
            }
            FileChoice::ListFiles => {
                file::list_files(&mut self.prompt, &self.store)?;
                Ok(State::FileMenu)
            }
            FileChoice::Exit => {
                writeln!(self.prompt.out(), "Exiting program...")?;
                Ok(State::Exit)
            }
        }
    }

    /// Shows the record menu once and handles one selection.
    ///
    /// # Errors
    ///
    /// Returns an error only if console I/O fails.
    pub fn record_menu(&mut self, mut session: Session) -> io::Result<State> {
        let title = session.path().display().to_string();
        render_record_menu(self.prompt.out(), &title, session.is_dirty())?;
        let Some(input) = self.prompt.ask("Enter choice (1-8): ")? else {
            return self.leave(session);
        };

        let Some(choice) = RecordChoice::parse(&input) else {
            writeln!(self.prompt.out(), "[ERR] Invalid choice.\n")?;
            return Ok(State::RecordMenu(session));
        };
        debug!(?choice, "record menu");

        let limits = self.store.config().limits();
        match choice {
            RecordChoice::Create => record::create(&mut self.prompt, &mut session, limits)?,
            RecordChoice::Update => record::update(&mut self.prompt, &mut session, limits)?,
            RecordChoice::Delete => record::delete(&mut self.prompt, &mut session)?,
            RecordChoice::Search => record::search(&mut self.prompt, &session)?,
            RecordChoice::Save => record::save(&mut self.prompt, &mut session, &mut self.store)?,
            RecordChoice::List => record::list(&mut self.prompt, &session)?,
            RecordChoice::Export => record::export(&mut self.prompt, &session, &mut self.store)?,
            RecordChoice::Back => return self.leave(session),
        }
        Ok(State::RecordMenu(session))
    }

    /// Returns to the file menu, dropping the session.
    fn leave(&mut self, session: Session) -> io::Result<State> {
        let out = self.prompt.out();
        if session.is_dirty() {
            info!(path = %session.path().display(), "discarding unsaved changes");
            writeln!(out, "[!] Unsaved changes to {} were discarded.", session.path().display())?;
        }
        writeln!(out, "Returning to file menu...\n")?;
        Ok(State::FileMenu)
    }
}
