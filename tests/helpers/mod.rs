#![allow(dead_code)]

use thrive::reminders::{Reminder, ReminderBoard, ReminderStore};
use thrive::storage::{KeyValueStore, MemoryStore, SqliteStore};

pub const KEY: &str = thrive::config::DEFAULT_REMINDERS_KEY;

/// Reminder store over a fresh in-memory SQLite database.
pub fn sqlite_store() -> ReminderStore<SqliteStore> {
    let conn = thrive::db::open_memory_database().unwrap();
    ReminderStore::new(SqliteStore::new(conn))
}

/// Board over an in-memory fake with the default three-entry preview.
pub fn memory_board() -> ReminderBoard<MemoryStore> {
    ReminderBoard::new(ReminderStore::new(MemoryStore::new()), 3)
}

/// Raw persisted value of the reminder slot.
pub fn raw<S: KeyValueStore>(store: &ReminderStore<S>) -> Option<String> {
    store.storage().get_item(store.key()).unwrap()
}

/// `n` distinct reminders.
pub fn sample_reminders(n: usize) -> Vec<Reminder> {
    (0..n)
        .map(|i| Reminder::new(format!("Medication {i}"), format!("{:02}:30", i % 24)))
        .collect()
}
