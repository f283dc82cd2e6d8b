//! Menu choices and their rendering.

use std::io::{self, Write};

/// An entry of the file menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChoice {
    /// Start an empty dataset for a new file.
    New,
    /// Load an existing file.
    Load,
    /// Delete a file from disk.
    DeleteFile,
    /// Leave the program.
    Exit,
    /// List dataset files in the data directory.
    ListFiles,
}

impl FileChoice {
    /// All entries, in menu order.
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Load,
        Self::DeleteFile,
        Self::Exit,
        Self::ListFiles,
    ];

    /// Parses a menu selection. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::New),
            "2" => Some(Self::Load),
            "3" => Some(Self::DeleteFile),
            "4" => Some(Self::Exit),
            "5" => Some(Self::ListFiles),
            _ => None,
        }
    }

    /// The key that selects this entry.
    pub const fn key(self) -> u8 {
        match self {
            Self::New => 1,
            Self::Load => 2,
            Self::DeleteFile => 3,
            Self::Exit => 4,
            Self::ListFiles => 5,
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "Create New File",
            Self::Load => "Load Existing File",
            Self::DeleteFile => "Delete File",
            Self::Exit => "Exit Program",
            Self::ListFiles => "List Files",
        }
    }
}

/// An entry of the record menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordChoice {
    /// Add a record.
    Create,
    /// Change a record's name, course and year.
    Update,
    /// Remove a record.
    Delete,
    /// Search by id or name.
    Search,
    /// Write the dataset to its file.
    Save,
    /// Return to the file menu.
    Back,
    /// Print every record.
    List,
    /// Write an export file next to the dataset.
    Export,
}

impl RecordChoice {
    /// All entries, in menu order.
    pub const ALL: [Self; 8] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Search,
        Self::Save,
        Self::Back,
        Self::List,
        Self::Export,
    ];

    /// Parses a menu selection. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let key: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// The key that selects this entry.
    pub const fn key(self) -> u8 {
        match self {
            Self::Create => 1,
            Self::Update => 2,
            Self::Delete => 3,
            Self::Search => 4,
            Self::Save => 5,
            Self::Back => 6,
            Self::List => 7,
            Self::Export => 8,
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Create Record",
            Self::Update => "Update Record",
            Self::Delete => "Delete Record",
            Self::Search => "Search Record",
            Self::Save => "Save Data",
            Self::Back => "Back to File Menu",
            Self::List => "List Records",
            Self::Export => "Export Data",
        }
    }
}

/// Prints the file menu.
pub fn render_file_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nFILE OPTIONS")?;
    for choice in FileChoice::ALL {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    Ok(())
}

/// Prints the record menu, headed by the open file.
pub fn render_record_menu(out: &mut impl Write, title: &str, dirty: bool) -> io::Result<()> {
    let marker = if dirty { " (unsaved changes)" } else { "" };
    writeln!(out, "\nMENU [{title}]{marker}")?;
    for choice in RecordChoice::ALL {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_choice_round_trips_keys() {
        for choice in FileChoice::ALL {
            assert_eq!(FileChoice::parse(&choice.key().to_string()), Some(choice));
        }
        assert_eq!(FileChoice::parse(" 4 "), Some(FileChoice::Exit));
        assert_eq!(FileChoice::parse("0"), None);
        assert_eq!(FileChoice::parse("exit"), None);
        assert_eq!(FileChoice::parse(""), None);
    }

    #[test]
    fn record_choice_parse() {
        for choice in RecordChoice::ALL {
            assert_eq!(RecordChoice::parse(&choice.key().to_string()), Some(choice));
        }
        assert_eq!(RecordChoice::parse("9"), None);
        assert_eq!(RecordChoice::parse("-1"), None);
        assert_eq!(RecordChoice::parse("save"), None);
    }

    #[test]
    fn record_menu_marks_dirty() {
        let mut out = Vec::new();
        render_record_menu(&mut out, "class.json", true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("MENU [class.json] (unsaved changes)"));
        assert!(text.contains("6. Back to File Menu"));
        assert!(text.contains("8. Export Data"));
    }
}
