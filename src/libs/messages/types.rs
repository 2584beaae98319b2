//! Structured message catalog for all user-facing text.
//!
//! Every string printed to the terminal originates here, keyed by a
//! `Message` variant. The matching text lives in the `Display`
//! implementation in [`super::display`], keeping wording in one place.

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TasksHeader,
    NoTasksFound,
    ConfirmDeleteTask(String),
    DeleteCancelled,
    NoChangesDetected,

    // === CONFIGURATION MESSAGES ===
    ConfigInitHeader,
    ConfigSaved,
    PromptDbPath,
}
