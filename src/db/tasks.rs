//! The task store: CRUD operations over the `tasks` table.
//!
//! Each handle owns one connection opened at construction. Every
//! operation is a single parameterized statement; there are no
//! multi-step transactions and no caching between calls. Mutations that
//! match zero rows report [`TaskError::NotFound`] rather than silently
//! succeeding, so callers can tell a no-op from a real update.

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::error::TaskError;
use crate::libs::task::{Task, TaskStatus};
use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (task_name, details, status) VALUES (?1, ?2, ?3)";
const UPDATE_TASK: &str = "UPDATE tasks SET task_name = ?2, details = ?3, status = ?4 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_ALL_TASKS: &str = "SELECT id, task_name, details, status FROM tasks ORDER BY id";
const SELECT_TASK_BY_ID: &str = "SELECT id, task_name, details, status FROM tasks WHERE id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens the store at the location the configuration resolves to,
    /// ensuring the schema exists.
    pub fn new(config: &Config) -> Result<Self> {
        let db = Db::new(&config.resolve_db_path()?)?;
        Ok(Self { conn: db.conn })
    }

    /// Persists a new task and returns its assigned id.
    pub fn insert(&mut self, task: &Task) -> Result<i64, TaskError> {
        validate(task)?;
        self.conn.execute(INSERT_TASK, params![task.name, task.details, task.status.as_str()])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Rewrites name, details, and status of the task identified by
    /// `task.id`.
    pub fn update(&mut self, task: &Task) -> Result<(), TaskError> {
        validate(task)?;
        let id = task.id.ok_or_else(|| TaskError::Validation("task has no id".to_string()))?;

        let affected = self.conn.execute(UPDATE_TASK, params![id, task.name, task.details, task.status.as_str()])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }

    /// Removes the task with the given id permanently.
    pub fn delete(&mut self, id: i64) -> Result<(), TaskError> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }

    /// Every task, ordered by ascending id. An empty table yields an
    /// empty Vec.
    pub fn fetch_all(&mut self) -> Result<Vec<Task>, TaskError> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TASKS)?;
        let task_iter = stmt.query_map([], map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Looks up a single task by id.
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>, TaskError> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], map_row)
            .optional()
            .map_err(Into::into)
    }
}

/// Non-empty name is the store's only validation rule.
fn validate(task: &Task) -> Result<(), TaskError> {
    if task.name.trim().is_empty() {
        return Err(TaskError::Validation("task name must not be empty".to_string()));
    }
    Ok(())
}

fn map_row(row: &Row) -> rusqlite::Result<Task> {
    // The status column carries no constraint, so NULL falls back to the
    // default and unknown text surfaces as a conversion failure.
    let status: Option<String> = row.get(3)?;
    let status = match status {
        Some(text) => text
            .parse::<TaskStatus>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?,
        None => TaskStatus::default(),
    };

    let details: Option<String> = row.get(2)?;

    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        details: details.unwrap_or_default(),
        status,
    })
}
