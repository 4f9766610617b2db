//! Reminder record, load outcome, and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::StorageError;

/// A medication name and the time of day to take it.
///
/// Serializes to exactly `{"name": ..., "time": ...}`; that shape is the
/// persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub name: String,
    /// Wall-clock time of day as the user entered it (e.g. `"08:00"`).
    pub time: String,
}

impl Reminder {
    pub fn new(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
        }
    }

    /// Display label used by both reminder views.
    pub fn label(&self) -> String {
        format!("{} — {}", self.name, self.time)
    }
}

/// What reading the reminder slot found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The slot has never been written.
    Missing,
    /// The slot held a well-formed list.
    Found(Vec<Reminder>),
    /// The slot could not be read or did not hold a reminder list; treated as empty.
    Recovered { cause: RecoveryCause },
}

/// Why a read fell back to the empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryCause {
    /// The backend failed; the stored value may still be intact.
    Unreadable(String),
    /// The stored value is not a reminder list.
    Malformed(String),
}

impl std::fmt::Display for RecoveryCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable(e) => write!(f, "storage unreadable: {e}"),
            Self::Malformed(e) => write!(f, "malformed contents: {e}"),
        }
    }
}

impl LoadOutcome {
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }

    pub fn into_reminders(self) -> Vec<Reminder> {
        match self {
            Self::Found(list) => list,
            Self::Missing | Self::Recovered { .. } => Vec::new(),
        }
    }
}

/// Which required reminder field was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Time,
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Name => "medication name",
            Self::Time => "time",
        })
    }
}

#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("Please provide medication name and time (missing {0})")]
    MissingField(MissingField),

    #[error("no reminder at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to serialize reminders: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
