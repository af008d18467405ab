//! Task CRUD operations.
//!
//! Name uniqueness is enforced here (after trimming) so callers get a
//! typed [`TrackerError::Conflict`] instead of a raw constraint violation.
//! Matching is case-sensitive: 'Client A' and 'client a' are two tasks.
//! Deletion is an unconditional cascade over the task's entries and
//! segments; archiving (`is_active = false`) is the history-preserving
//! alternative.

use crate::db::db::Db;
use crate::libs::error::TrackerError;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskUpdate};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_TASK: &str = "INSERT INTO tasks (name, color) VALUES (?1, ?2)";
const UPDATE_NAME: &str = "UPDATE tasks SET name = ?2 WHERE id = ?1";
const UPDATE_COLOR: &str = "UPDATE tasks SET color = ?2 WHERE id = ?1";
const UPDATE_IS_ACTIVE: &str = "UPDATE tasks SET is_active = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_ACTIVE: &str = "SELECT id, name, color, is_active, created_at FROM tasks WHERE is_active = 1 ORDER BY name";
const SELECT_ALL: &str = "SELECT id, name, color, is_active, created_at FROM tasks ORDER BY name";
const SELECT_BY_ID: &str = "SELECT id, name, color, is_active, created_at FROM tasks WHERE id = ?1";
const SELECT_BY_NAME: &str = "SELECT id, name, color, is_active, created_at FROM tasks WHERE name = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Creates a task and returns its id.
    pub fn create(&mut self, task: &Task) -> Result<i64> {
        let name = task.name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation(Message::TaskNameEmpty).into());
        }
        if self.get_by_name(name)?.is_some() {
            return Err(TrackerError::Conflict(Message::TaskNameTaken(name.to_string())).into());
        }
        self.conn.execute(INSERT_TASK, params![name, task.color])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Lists tasks ordered by name.
    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let sql = match filter {
            TaskFilter::Active => SELECT_ACTIVE,
            TaskFilter::All => SELECT_ALL,
        };
        let mut stmt = self.conn.prepare(sql)?;
        let task_iter = stmt.query_map([], Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn.query_row(SELECT_BY_ID, params![id], Self::map_row).optional().map_err(Into::into)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Task>> {
        self.conn.query_row(SELECT_BY_NAME, params![name], Self::map_row).optional().map_err(Into::into)
    }

    /// Applies a partial update; untouched fields keep their values.
    pub fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<()> {
        let existing = self.get_by_id(id)?.ok_or(TrackerError::NotFound(Message::TaskNotFound(id)))?;

        if let Some(name) = &update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(TrackerError::Validation(Message::TaskNameEmpty).into());
            }
            if name != existing.name && self.get_by_name(name)?.is_some() {
                return Err(TrackerError::Conflict(Message::TaskNameTaken(name.to_string())).into());
            }
            self.conn.execute(UPDATE_NAME, params![id, name])?;
        }
        if let Some(color) = &update.color {
            self.conn.execute(UPDATE_COLOR, params![id, color])?;
        }
        if let Some(is_active) = update.is_active {
            self.conn.execute(UPDATE_IS_ACTIVE, params![id, is_active])?;
        }
        Ok(())
    }

    /// Deletes a task; its entries and their segments go with it.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TrackerError::NotFound(Message::TaskNotFound(id)).into());
        }
        Ok(())
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            color: row.get(2)?,
            is_active: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}
