pub mod ask;
pub mod doctor;
pub mod home;
pub mod lookup;
pub mod remind;
pub mod reset;

use anyhow::Result;

use thrive::config::ThriveConfig;
use thrive::reminders::{ReminderBoard, ReminderStore};
use thrive::storage::SqliteStore;

/// Open the configured database and wrap it in a reminder board.
pub fn open_board(config: &ThriveConfig) -> Result<ReminderBoard<SqliteStore>> {
    let db_path = config.resolved_db_path();
    let conn = thrive::db::open_database(&db_path)?;
    let store = ReminderStore::with_key(SqliteStore::new(conn), &config.storage.reminders_key);
    Ok(ReminderBoard::new(store, config.display.preview_len))
}
