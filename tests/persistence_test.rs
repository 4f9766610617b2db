mod helpers;

use helpers::KEY;
use tempfile::TempDir;
use thrive::db;
use thrive::reminders::{LoadOutcome, RecoveryCause, Reminder, ReminderStore};
use thrive::storage::{KeyValueStore, SqliteStore};

fn open_store(path: &std::path::Path) -> ReminderStore<SqliteStore> {
    ReminderStore::new(SqliteStore::new(db::open_database(path).unwrap()))
}

#[test]
fn reminders_survive_reopening_the_database() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("thrive.db");

    {
        let store = open_store(&db_path);
        store.add("Paracetamol", "08:00").unwrap();
        store.add("Ibuprofen", "20:00").unwrap();
    }

    let store = open_store(&db_path);
    assert_eq!(
        store.load(),
        vec![
            Reminder::new("Paracetamol", "08:00"),
            Reminder::new("Ibuprofen", "20:00"),
        ]
    );
    assert!(store.storage().updated_at(KEY).unwrap().is_some());
}

#[test]
fn corrupt_value_on_disk_is_reported_not_fatal() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("thrive.db");

    {
        let storage = SqliteStore::new(db::open_database(&db_path).unwrap());
        storage.set_item(KEY, "[{\"name\":\"Paracetamol\"").unwrap();
    }

    let store = open_store(&db_path);
    match store.load_outcome() {
        LoadOutcome::Recovered {
            cause: RecoveryCause::Malformed(msg),
        } => assert!(!msg.is_empty()),
        other => panic!("expected recovery, got {other:?}"),
    }
    assert!(store.load().is_empty());
}

#[test]
fn clear_removes_row_from_disk() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("thrive.db");

    let store = open_store(&db_path);
    store.add("Amoxicillin", "07:00").unwrap();
    store.clear().unwrap();
    drop(store);

    let conn = db::open_database(&db_path).unwrap();
    let report = db::check_database_health(&conn).unwrap();
    assert_eq!(report.key_count, 0);
}
