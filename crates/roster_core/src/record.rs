//! The record entity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a dataset.
///
/// All fields are free text. `id` is digits-only when created through
/// [`crate::Dataset::create`], but nothing re-checks that afterwards and ids
/// need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Course the record is enrolled in.
    pub course: String,
    /// Year, as entered.
    pub year: String,
}

impl Record {
    /// Creates a record with the given id, without any filtering.
    pub fn new(id: impl Into<String>, details: RecordDetails) -> Self {
        Self {
            id: id.into(),
            name: details.name,
            course: details.course,
            year: details.year,
        }
    }

    /// Returns a copy of the mutable fields.
    #[must_use]
    pub fn details(&self) -> RecordDetails {
        RecordDetails {
            name: self.name.clone(),
            course: self.course.clone(),
            year: self.year.clone(),
        }
    }

    /// Overwrites name, course and year. The id is left untouched.
    pub fn apply(&mut self, details: RecordDetails) {
        self.name = details.name;
        self.course = details.course;
        self.year = details.year;
    }

    /// Case-insensitive substring match against id or name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle) || self.name.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, name: {}, course: {}, year: {}",
            self.id, self.name, self.course, self.year
        )
    }
}

/// The user-editable fields of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDetails {
    /// Display name.
    pub name: String,
    /// Course.
    pub course: String,
    /// Year.
    pub year: String,
}

impl RecordDetails {
    /// Creates record details.
    pub fn new(name: impl Into<String>, course: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            course: course.into(),
            year: year.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_id() {
        let mut record = Record::new("7", RecordDetails::new("Ann", "CS", "1"));
        record.apply(RecordDetails::new("Anna", "Math", "2"));

        assert_eq!(record.id, "7");
        assert_eq!(record.details(), RecordDetails::new("Anna", "Math", "2"));
    }

    #[test]
    fn matches_id_or_name_only() {
        let record = Record::new("1203", RecordDetails::new("Alice", "Biology", "2024"));

        assert!(record.matches_lowercase("ali"));
        assert!(record.matches_lowercase("20"));
        assert!(!record.matches_lowercase("bio"));
        assert!(!record.matches_lowercase("2024"));
    }

    #[test]
    fn serializes_fields_in_order() {
        let record = Record::new("1", RecordDetails::new("A", "B", "C"));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"1","name":"A","course":"B","year":"C"}"#);
    }

    #[test]
    fn display() {
        let record = Record::new("1", RecordDetails::new("Alice", "CS", "2"));
        assert_eq!(record.to_string(), "id: 1, name: Alice, course: CS, year: 2");
    }
}
