//! The two reminder views: the full list and the short home preview.

use std::fmt;

use super::types::Reminder;

/// Shown by the list view when there is nothing to list.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No reminders set.";

/// One row of the full list. `index` is the position passed back to
/// [`ReminderStore::delete_at`](super::store::ReminderStore::delete_at).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewView {
    pub lines: Vec<String>,
}

/// Both views rendered from the same snapshot of the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReminderViews {
    pub list: ListView,
    pub preview: PreviewView,
}

pub fn render_list(reminders: &[Reminder]) -> ListView {
    ListView {
        rows: reminders
            .iter()
            .enumerate()
            .map(|(index, r)| ListRow {
                index,
                label: r.label(),
            })
            .collect(),
    }
}

/// The first `limit` reminders, in list order.
pub fn render_preview(reminders: &[Reminder], limit: usize) -> PreviewView {
    PreviewView {
        lines: reminders.iter().take(limit).map(Reminder::label).collect(),
    }
}

pub fn render_views(reminders: &[Reminder], preview_len: usize) -> ReminderViews {
    ReminderViews {
        list: render_list(reminders),
        preview: render_preview(reminders, preview_len),
    }
}

impl fmt::Display for ListView {
    /// Rows are numbered from 1; that number is what `remind delete` takes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "{EMPTY_LIST_PLACEHOLDER}");
        }
        for row in &self.rows {
            writeln!(f, "{:>3}. {}", row.index + 1, row.label)?;
        }
        Ok(())
    }
}

impl fmt::Display for PreviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "  • {line}")?;
        }
        Ok(())
    }
}
