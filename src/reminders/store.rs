//! Reminder list persistence.
//!
//! Every operation follows the same cycle: read the whole list from the slot,
//! change it in memory, write the whole list back. There is no incremental
//! update and no protection against a second writer between the read and
//! the write.

use tracing::{debug, info, warn};

use super::types::{LoadOutcome, MissingField, RecoveryCause, Reminder, ReminderError};
use crate::config::DEFAULT_REMINDERS_KEY;
use crate::storage::KeyValueStore;

/// The reminder list kept in one slot of a [`KeyValueStore`].
pub struct ReminderStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> ReminderStore<S> {
    /// Store reminders under the default `thrive_reminders_v1` key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_REMINDERS_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the slot and report what was found.
    ///
    /// Unreadable storage and malformed contents both come back as
    /// [`LoadOutcome::Recovered`] rather than an error.
    pub fn load_outcome(&self) -> LoadOutcome {
        match self.storage.get_item(&self.key) {
            Ok(raw) => self.parse(raw),
            Err(e) => {
                warn!(key = %self.key, error = %e, "reminder storage unreadable, treating as empty");
                LoadOutcome::Recovered {
                    cause: RecoveryCause::Unreadable(e.to_string()),
                }
            }
        }
    }

    fn parse(&self, raw: Option<String>) -> LoadOutcome {
        let Some(raw) = raw else {
            return LoadOutcome::Missing;
        };
        match serde_json::from_str::<Vec<Reminder>>(&raw) {
            Ok(list) => LoadOutcome::Found(list),
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored reminders are malformed, treating as empty");
                LoadOutcome::Recovered {
                    cause: RecoveryCause::Malformed(e.to_string()),
                }
            }
        }
    }

    /// Read before a mutation. Malformed contents are replaced, but a failed
    /// backend read aborts: the stored list may still be intact.
    fn load_for_update(&self) -> Result<Vec<Reminder>, ReminderError> {
        let raw = self.storage.get_item(&self.key)?;
        Ok(self.parse(raw).into_reminders())
    }

    /// Current reminder list; empty when the slot is missing or unusable.
    pub fn load(&self) -> Vec<Reminder> {
        self.load_outcome().into_reminders()
    }

    /// Overwrite the slot with `list`.
    pub fn save(&self, list: &[Reminder]) -> Result<(), ReminderError> {
        let json = serde_json::to_string(list)?;
        self.storage.set_item(&self.key, &json)?;
        debug!(key = %self.key, count = list.len(), "reminders saved");
        Ok(())
    }

    /// Append a reminder. Both fields must be non-blank; the name is stored
    /// trimmed.
    pub fn add(&self, name: &str, time: &str) -> Result<Reminder, ReminderError> {
        let name = name.trim();
        let time = time.trim();
        if name.is_empty() {
            return Err(ReminderError::MissingField(MissingField::Name));
        }
        if time.is_empty() {
            return Err(ReminderError::MissingField(MissingField::Time));
        }

        let reminder = Reminder::new(name, time);
        let mut items = self.load_for_update()?;
        items.push(reminder.clone());
        self.save(&items)?;

        info!(name = %reminder.name, time = %reminder.time, position = items.len() - 1, "reminder added");
        Ok(reminder)
    }

    /// Remove the reminder at `index`, returning it.
    ///
    /// An index past the end leaves the slot untouched.
    pub fn delete_at(&self, index: usize) -> Result<Reminder, ReminderError> {
        let mut items = self.load_for_update()?;
        if index >= items.len() {
            return Err(ReminderError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }

        let removed = items.remove(index);
        self.save(&items)?;

        info!(name = %removed.name, position = index, "reminder deleted");
        Ok(removed)
    }

    /// Drop the slot entirely.
    pub fn clear(&self) -> Result<(), ReminderError> {
        self.storage.remove_item(&self.key)?;
        info!(key = %self.key, "reminders cleared");
        Ok(())
    }
}
