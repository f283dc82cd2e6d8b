//! Property-based test generators using proptest.

use proptest::prelude::*;
use roster_core::{Dataset, Record, RecordDetails};

/// Strategy for digit-only ids, short enough to collide often.
pub fn id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{0,3}").expect("Invalid regex")
}

/// Strategy for raw id input as a user might type it.
pub fn raw_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-zA-Z -]{0,8}").expect("Invalid regex")
}

/// Strategy for free-text field values: any non-control characters,
/// including quotes, backslashes and non-ASCII text.
pub fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\\p{Cc}]{0,12}").expect("Invalid regex")
}

/// Strategy for validated record details.
pub fn details_strategy() -> impl Strategy<Value = RecordDetails> {
    (field_strategy(), field_strategy(), field_strategy())
        .prop_map(|(name, course, year)| RecordDetails::new(name, course, year))
}

/// Strategy for records with digit-only ids.
pub fn record_strategy() -> impl Strategy<Value = Record> {
    (id_strategy(), details_strategy()).prop_map(|(id, details)| Record::new(id, details))
}

/// Strategy for datasets of up to `max_len` records.
pub fn dataset_strategy(max_len: usize) -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record_strategy(), 0..=max_len).prop_map(Dataset::from_records)
}

/// Strategy for search keywords.
pub fn keyword_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9]{0,3}").expect("Invalid regex")
}

/// Cases for checking the generators themselves.
pub const QUICK_CASES: u32 = 32;

/// Cases for dataset properties. Some of them round-trip through a temp
/// directory, so this stays well below proptest's default.
pub const DATASET_CASES: u32 = 96;

/// Builds a proptest config running `cases` cases.
///
/// Shrinking is bounded relative to the case count; datasets are at most a
/// few dozen records, so failures shrink quickly.
#[must_use]
pub fn property_config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases,
        max_shrink_iters: cases * 4,
        ..ProptestConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(property_config(QUICK_CASES))]

        #[test]
        fn ids_are_digits(id in id_strategy()) {
            prop_assert!(id.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn fields_have_no_control_characters(field in field_strategy()) {
            prop_assert!(!field.chars().any(char::is_control));
            prop_assert!(field.chars().count() <= 12);
        }

        #[test]
        fn fields_pass_validation(details in details_strategy()) {
            let limits = roster_core::FieldLimits::default();
            prop_assert!(limits.details(&details.name, &details.course, &details.year).is_ok());
        }
    }
}
