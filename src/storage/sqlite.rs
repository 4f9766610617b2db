use rusqlite::{params, Connection, OptionalExtension};

use super::{KeyValueStore, StorageError};

/// [`KeyValueStore`] over the `local_storage` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wrap a connection whose schema has already been initialized
    /// (see [`crate::db::open_database`]).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// RFC 3339 timestamp of the last write to `key`, if the key exists.
    pub fn updated_at(&self, key: &str) -> Result<Option<String>, StorageError> {
        let ts = self
            .conn
            .query_row(
                "SELECT updated_at FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(ts)
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        tracing::trace!(key, bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::new(crate::db::open_memory_database().unwrap())
    }

    #[test]
    fn missing_key_reads_none() {
        let store = store();
        assert_eq!(store.get_item("nope").unwrap(), None);
        assert_eq!(store.updated_at("nope").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let store = store();
        store.set_item("k", "one").unwrap();
        store.set_item("k", "two").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));
        assert!(store.updated_at("k").unwrap().is_some());

        let rows: i64 = store
            .connection()
            .query_row("SELECT COUNT(*) FROM local_storage", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let store = store();
        store.remove_item("k").unwrap();
        store.set_item("k", "v").unwrap();
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }
}
