//! Persisted string key-value slots.
//!
//! [`KeyValueStore`] is the seam between the reminder logic and wherever the
//! bytes live. [`SqliteStore`] is the durable backend used by the CLI;
//! [`MemoryStore`] keeps everything in a map and is what tests inject.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(#[from] rusqlite::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-to-string store with `localStorage` semantics: reads of a missing
/// key yield `None`, writes overwrite unconditionally.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
