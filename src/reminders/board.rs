//! Keeps the rendered reminder views in step with the stored list.

use super::store::ReminderStore;
use super::types::{Reminder, ReminderError};
use super::view::{render_views, ReminderViews};
use crate::storage::KeyValueStore;

/// Front door for callers that display reminders.
///
/// Each mutation is followed by a fresh read of the slot and a re-render of
/// both views, so what is shown is always what is stored.
pub struct ReminderBoard<S> {
    store: ReminderStore<S>,
    preview_len: usize,
}

impl<S: KeyValueStore> ReminderBoard<S> {
    pub fn new(store: ReminderStore<S>, preview_len: usize) -> Self {
        Self { store, preview_len }
    }

    pub fn store(&self) -> &ReminderStore<S> {
        &self.store
    }

    /// Render both views from the current slot contents.
    pub fn views(&self) -> ReminderViews {
        render_views(&self.store.load(), self.preview_len)
    }

    pub fn add(&self, name: &str, time: &str) -> Result<(Reminder, ReminderViews), ReminderError> {
        let added = self.store.add(name, time)?;
        Ok((added, self.views()))
    }

    pub fn delete_at(&self, index: usize) -> Result<(Reminder, ReminderViews), ReminderError> {
        let removed = self.store.delete_at(index)?;
        Ok((removed, self.views()))
    }
}
