//! SQL DDL for the Thrive database.
//!
//! `local_storage` is a plain string key-value table that plays the role of
//! the browser's `localStorage`: every persisted slot is one row.
//! `schema_meta` records the schema version. All DDL uses `IF NOT EXISTS`.

use rusqlite::Connection;

/// The schema version that the current binary writes.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS local_storage (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', ?1)",
        [CURRENT_SCHEMA_VERSION.to_string()],
    )?;

    Ok(())
}

/// Get the schema version recorded in `schema_meta`.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row(
        "SELECT value FROM schema_meta WHERE key = 'schema_version'",
        [],
        |row| {
            let val: String = row.get(0)?;
            Ok(val.parse::<u32>().unwrap_or(0))
        },
    )
}
