//! Input validation boundary.
//!
//! Raw console input passes through here before any record is built or
//! changed. Ids are coerced, the other fields are checked.

use crate::record::RecordDetails;
use std::fmt;
use thiserror::Error;

/// Default maximum length of a name, course or year, in characters.
pub const DEFAULT_MAX_FIELD_LEN: usize = 256;

/// A validated record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The name field.
    Name,
    /// The course field.
    Course,
    /// The year field.
    Year,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Course => "course",
            Self::Year => "year",
        })
    }
}

/// A field value rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value contains a control character.
    #[error("{field} contains a control character")]
    ControlCharacter {
        /// The offending field.
        field: Field,
    },

    /// The value is longer than allowed.
    #[error("{field} is {len} characters long, at most {max} allowed")]
    TooLong {
        /// The offending field.
        field: Field,
        /// Actual length in characters.
        len: usize,
        /// Maximum length in characters.
        max: usize,
    },
}

/// Strips every character that is not an ASCII digit.
///
/// The result may be empty; that is accepted.
#[must_use]
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Limits applied to name, course and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    /// Maximum length in characters.
    pub max_len: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_FIELD_LEN,
        }
    }
}

impl FieldLimits {
    /// Creates limits with the given maximum length.
    #[must_use]
    pub const fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// Checks a single field value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value has a control character or is too long.
    pub fn check(&self, field: Field, value: &str) -> Result<(), ValidationError> {
        if value.chars().any(char::is_control) {
            return Err(ValidationError::ControlCharacter { field });
        }
        let len = value.chars().count();
        if len > self.max_len {
            return Err(ValidationError::TooLong {
                field,
                len,
                max: self.max_len,
            });
        }
        Ok(())
    }

    /// Validates raw name, course and year input into [`RecordDetails`].
    ///
    /// Empty values are accepted.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails [`FieldLimits::check`].
    pub fn details(
        &self,
        name: &str,
        course: &str,
        year: &str,
    ) -> Result<RecordDetails, ValidationError> {
        self.check(Field::Name, name)?;
        self.check(Field::Course, course)?;
        self.check(Field::Year, year)?;
        Ok(RecordDetails::new(name, course, year))
    }
}
