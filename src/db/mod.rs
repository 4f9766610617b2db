pub mod schema;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open (or create) the Thrive database at the given path with the schema
/// initialized.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.busy_timeout(std::time::Duration::from_millis(5000))?;

    schema::init_schema(&conn).context("failed to initialize schema")?;

    tracing::debug!(path = %path.display(), "database initialized");
    Ok(conn)
}

/// Open an in-memory database with the schema initialized.
pub fn open_memory_database() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    schema::init_schema(&conn).context("failed to initialize schema")?;
    Ok(conn)
}

/// Result of [`check_database_health`].
#[derive(Debug)]
pub struct HealthReport {
    pub schema_version: u32,
    pub integrity_ok: bool,
    pub integrity_details: String,
    /// Number of keys in the `local_storage` table.
    pub key_count: u64,
}

/// Run `PRAGMA integrity_check` and collect basic counters.
pub fn check_database_health(conn: &Connection) -> Result<HealthReport> {
    let integrity: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .context("integrity check failed to run")?;

    let key_count: i64 = conn.query_row("SELECT COUNT(*) FROM local_storage", [], |row| {
        row.get(0)
    })?;

    Ok(HealthReport {
        schema_version: schema::get_schema_version(conn)?,
        integrity_ok: integrity == "ok",
        integrity_details: integrity,
        key_count: key_count as u64,
    })
}
