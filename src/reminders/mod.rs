pub mod board;
pub mod store;
pub mod types;
pub mod view;

pub use board::ReminderBoard;
pub use store::ReminderStore;
pub use types::{LoadOutcome, MissingField, RecoveryCause, Reminder, ReminderError};
pub use view::{ListRow, ListView, PreviewView, ReminderViews};
