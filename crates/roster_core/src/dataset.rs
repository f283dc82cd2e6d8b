//! The in-memory ordered record list.

use crate::error::{CoreError, CoreResult};
use crate::record::{Record, RecordDetails};
use crate::validate::digits_only;
use serde::{Deserialize, Serialize};

/// An ordered sequence of records, in insertion order.
///
/// Ids are not unique. `update` and `delete` act on the first record whose
/// id matches exactly; `search` returns every match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dataset holding `records` in the given order.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the records in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the dataset, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns the first record whose id equals `id`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Appends a new record.
    ///
    /// The id is `raw_id` with every non-digit removed, which may leave it
    /// empty. No uniqueness check is made.
    pub fn create(&mut self, raw_id: &str, details: RecordDetails) -> &Record {
        self.records.push(Record::new(digits_only(raw_id), details));
        let index = self.records.len() - 1;
        &self.records[index]
    }

    /// Overwrites name, course and year of the first record with `target_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RecordNotFound`] if no record matches; the
    /// dataset is unchanged in that case.
    pub fn update(&mut self, target_id: &str, details: RecordDetails) -> CoreResult<&Record> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == target_id)
            .ok_or_else(|| CoreError::record_not_found(target_id))?;
        record.apply(details);
        Ok(&*record)
    }

    /// Removes the first record with `target_id` and returns it.
    ///
    /// Later records keep their relative order, including any that share
    /// the same id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RecordNotFound`] if no record matches.
    pub fn delete(&mut self, target_id: &str) -> CoreResult<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == target_id)
            .ok_or_else(|| CoreError::record_not_found(target_id))?;
        Ok(self.records.remove(index))
    }

    /// Returns every record whose id or name contains `keyword`,
    /// ignoring case, in dataset order.
    ///
    /// Course and year are not searched. An empty keyword matches everything.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<&Record> {
        let needle = keyword.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.matches_lowercase(&needle))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::from_records(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str) -> RecordDetails {
        RecordDetails::new(name, "CS", "1")
    }

    #[test]
    fn create_filters_id() {
        let mut dataset = Dataset::new();
        let record = dataset.create("id-42", details("Ann"));
        assert_eq!(record.id, "42");

        let record = dataset.create("none", details("Ben"));
        assert_eq!(record.id, "");
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn create_allows_duplicate_ids() {
        let mut dataset = Dataset::new();
        dataset.create("1", details("Ann"));
        dataset.create("1", details("Ben"));

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.find("1").unwrap().name, "Ann");
    }

    #[test]
    fn update_first_match_only() {
        let mut dataset = Dataset::new();
        dataset.create("1", details("Ann"));
        dataset.create("1", details("Ben"));

        let updated = dataset
            .update("1", RecordDetails::new("Cat", "EE", "4"))
            .unwrap();
        assert_eq!(updated.name, "Cat");

        let names: Vec<_> = dataset.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Cat", "Ben"]);
    }

    #[test]
    fn update_missing_is_noop() {
        let mut dataset = Dataset::new();
        dataset.create("1", details("Ann"));
        let before = dataset.clone();

        let err = dataset.update("2", details("Zed")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(dataset, before);
    }

    #[test]
    fn update_requires_exact_id() {
        let mut dataset = Dataset::new();
        dataset.create("12", details("Ann"));

        assert!(dataset.update("1", details("Zed")).is_err());
        assert!(dataset.update(" 12", details("Zed")).is_err());
    }

    #[test]
    fn delete_first_match_preserves_order() {
        let mut dataset = Dataset::new();
        dataset.create("1", details("Ann"));
        dataset.create("2", details("Ben"));
        dataset.create("1", details("Cat"));
        dataset.create("3", details("Dan"));

        let removed = dataset.delete("1").unwrap();
        assert_eq!(removed.name, "Ann");

        let names: Vec<_> = dataset.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Ben", "Cat", "Dan"]);
    }

    #[test]
    fn delete_missing() {
        let mut dataset = Dataset::new();
        assert!(dataset.delete("1").unwrap_err().is_not_found());
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut dataset = Dataset::new();
        dataset.create("1", details("Alice"));
        dataset.create("2", details("Bob"));
        dataset.create("3", details("MALIK"));

        let names: Vec<_> = dataset.search("ALI").iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, ["Alice", "MALIK"]);
    }

    #[test]
    fn search_ignores_course_and_year() {
        let mut dataset = Dataset::new();
        dataset.create("1", RecordDetails::new("Alice", "Physics", "2031"));

        assert!(dataset.search("phys").is_empty());
        assert!(dataset.search("2031").is_empty());
        assert_eq!(dataset.search("1").len(), 1);
    }

    #[test]
    fn search_empty_keyword_matches_all() {
        let mut dataset = Dataset::new();
        dataset.create("1", details("Ann"));
        dataset.create("2", details("Ben"));

        assert_eq!(dataset.search("").len(), 2);
    }
}
