//! The task entity and its status enumeration.
//!
//! `Task` mirrors the `tasks` table one to one. The status column is
//! stored as plain text in the database, so `TaskStatus` owns the exact
//! storage strings and is the only place they appear.

use crate::libs::error::TaskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task progress states, stored as text in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// The exact string written to and read from the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// All recognized states, in lifecycle order.
    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    /// Accepts the storage strings plus the short forms users type on
    /// the command line ("todo", "in-progress", "done").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "to do" | "todo" => Ok(TaskStatus::ToDo),
            "in progress" | "in-progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(TaskError::Validation(format!("unknown status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the store at insertion, never by the caller.
    pub id: Option<i64>,
    pub name: String,
    pub details: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(name: &str, details: &str, status: TaskStatus) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            details: details.to_string(),
            status,
        }
    }
}
