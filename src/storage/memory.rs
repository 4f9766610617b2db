use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// In-process [`KeyValueStore`]. Nothing survives the value being dropped.
///
/// [`MemoryStore::set_unavailable`] makes every call fail, which is how a
/// blocked or quota-exhausted browser store behaves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store with one slot pre-populated.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable("memory store disabled".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
