//! Error taxonomy for task store operations.
//!
//! Every store operation surfaces one of three failure classes to its
//! caller. There is no retry or local recovery anywhere in the crate;
//! the command layer decides how to present the failure.

use thiserror::Error;

/// Failures produced by the task store.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A required field failed validation before touching the database.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation referenced a task id that does not exist.
    #[error("task with id {0} not found")]
    NotFound(i64),

    /// Connectivity, storage, or driver failure from SQLite.
    #[error("storage error: {0}")]
    Store(#[from] rusqlite::Error),
}
