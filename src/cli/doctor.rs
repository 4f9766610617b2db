//! CLI `doctor` command: run database diagnostics and check the reminder slot.

use anyhow::{Context, Result};

use thrive::config::ThriveConfig;
use thrive::db;
use thrive::reminders::{LoadOutcome, RecoveryCause, ReminderStore};
use thrive::storage::SqliteStore;

/// Run database diagnostics and print a health report.
pub fn doctor(config: &ThriveConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    if !db_path.exists() {
        println!("Database: not found at {}", db_path.display());
        println!("Run `thrive remind add <name> <time>` to create it.");
        return Ok(());
    }

    let file_size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

    let conn = db::open_database(&db_path).context("failed to open database (may be corrupt)")?;
    let report = db::check_database_health(&conn).context("failed to run health check")?;

    let storage = SqliteStore::new(conn);
    let key = config.storage.reminders_key.as_str();
    let last_write = storage.updated_at(key)?;
    let store = ReminderStore::with_key(storage, key);

    println!("Thrive Health Report");
    println!("====================");
    println!();
    println!("Database:          {}", db_path.display());
    println!("File size:         {}", format_bytes(file_size));
    println!("Schema version:    {}", report.schema_version);
    println!("Stored keys:       {}", report.key_count);
    println!();
    println!("Reminders ({key}):");
    match store.load_outcome() {
        LoadOutcome::Missing => println!("  Status:          empty (never written)"),
        LoadOutcome::Found(list) => {
            println!("  Status:          OK");
            println!("  Count:           {}", list.len());
        }
        LoadOutcome::Recovered {
            cause: cause @ RecoveryCause::Malformed(_),
        } => {
            println!("  Status:          UNREADABLE ({cause})");
            println!("  The list is treated as empty; the next `remind add` overwrites it.");
        }
        LoadOutcome::Recovered { cause } => {
            println!("  Status:          UNREADABLE ({cause})");
            println!("  Changes are refused until the stored list can be read again.");
        }
    }
    if let Some(ts) = last_write {
        println!("  Last written:    {ts}");
    }
    println!();
    if report.integrity_ok {
        println!("Integrity check:   PASSED");
    } else {
        println!("Integrity check:   FAILED ({})", report.integrity_details);
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
