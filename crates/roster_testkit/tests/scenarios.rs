//! End-to-end dataset scenarios against a real filesystem.

use roster_core::{CoreError, Dataset, RecordDetails, Session};
use roster_testkit::prelude::*;

#[test]
fn create_search_delete_save_reload() {
    let mut fixture = TestStore::new();
    let path = fixture.resolve_filename("class");

    let mut session = Session::new(&path);
    session.create("1", RecordDetails::new("Alice", "CS", "2"));
    session.create("2", RecordDetails::new("Bob", "EE", "3"));

    let found = session.search("ali");
    assert_eq!(found, vec![&alice()]);

    let removed = session.delete("1").unwrap();
    assert_eq!(removed, alice());
    assert_eq!(session.dataset().records(), [bob()]);

    session.save(&mut fixture.store).unwrap();
    let reloaded = Session::open(&fixture.store, &path).unwrap();
    assert_eq!(reloaded.dataset(), &Dataset::from_records(vec![bob()]));
}

#[test]
fn load_missing_file_is_empty() {
    let fixture = TestStore::new();
    let path = fixture.resolve_filename("never-written");

    let session = Session::open(&fixture.store, &path).unwrap();
    assert!(session.dataset().is_empty());
    assert!(!path.exists());
}

#[test]
fn delete_missing_file_reports_absence() {
    let mut fixture = TestStore::new();
    let path = fixture.resolve_filename("never-written");

    assert!(!fixture.delete(&path).unwrap());
}

#[test]
fn delete_file_leaves_memory_alone() {
    let mut fixture = TestStore::new();
    let path = fixture.resolve_filename("class");

    let mut session = Session::with_dataset(&path, sample_dataset());
    session.save(&mut fixture.store).unwrap();
    assert!(fixture.delete(&path).unwrap());

    assert_eq!(session.dataset(), &sample_dataset());
    session.save(&mut fixture.store).unwrap();
    assert_eq!(fixture.load(&path).unwrap(), sample_dataset());
}

#[test]
fn create_without_digits_gives_empty_id() {
    let mut session = Session::new("unused.json");
    let record = session.create("abc", RecordDetails::new("Nameless", "", ""));
    assert_eq!(record.id, "");
}

#[test]
fn malformed_file_is_reported_not_fatal() {
    let mut fixture = TestStore::new();
    let path = fixture.resolve_filename("broken");
    std::fs::write(&path, "[{\"id\": \"1\", \"name\": \"A\"").unwrap();

    let err = Session::open(&fixture.store, &path).unwrap_err();
    assert!(matches!(err, CoreError::Malformed { .. }));

    // The store stays usable and the bad file is untouched.
    let other = fixture.resolve_filename("fine");
    fixture.save(&sample_dataset(), &other).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[{\"id\": \"1\", \"name\": \"A\""
    );
}

#[test]
fn file_written_by_hand_loads() {
    let fixture = TestStore::new();
    let path = fixture.resolve_filename("legacy");
    let json = serde_json::json!([
        {"id": "10", "name": "Carol", "course": "Math", "year": "1"},
        {"id": "10", "name": "Dave", "course": "Art", "year": "4"}
    ]);
    std::fs::write(&path, serde_json::to_vec_pretty(&json).unwrap()).unwrap();

    let mut session = Session::open(&fixture.store, &path).unwrap();
    assert_eq!(session.dataset().len(), 2);

    session.delete("10").unwrap();
    assert_eq!(session.dataset().records()[0].name, "Dave");
}

#[test]
fn export_then_load_export() {
    let mut fixture = TestStore::new();
    let path = fixture.resolve_filename("class");
    let session = Session::with_dataset(&path, sample_dataset());

    let exported = session.export(&mut fixture.store, 1_700_000_000).unwrap();
    assert_eq!(exported, fixture.dir().join("class_export.json"));

    let reopened = Session::open(&fixture.store, &exported).unwrap();
    assert_eq!(reopened.dataset(), &sample_dataset());
}

#[test]
fn save_into_missing_directory_fails_cleanly() {
    let mut fixture = TestStore::new();
    let path = fixture.resolve_filename("no/such/dir/class");

    let mut session = Session::with_dataset(&path, sample_dataset());
    session.create("3", RecordDetails::new("Eve", "Law", "1"));

    let err = session.save(&mut fixture.store).unwrap_err();
    assert!(matches!(err, CoreError::Storage(_)));
    assert!(session.is_dirty());
    assert_eq!(session.dataset().len(), 3);
}
