use super::db::Db;
use super::error::TaskStoreError;
use crate::libs::task::{Task, TaskStatus};
use anyhow::Result;
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY,
    task TEXT NOT NULL,
    date TEXT NOT NULL,
    status TEXT NOT NULL
)";
const INSERT_TASK: &str = "INSERT INTO tasks (task, date, status) VALUES (?1, ?2, ?3)";
const SELECT_ALL_TASKS: &str = "SELECT id, task, date, status FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, task, date, status FROM tasks WHERE id = ?1";
const UPDATE_TASK_STATUS: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1";
const RENAME_TASK: &str = "UPDATE tasks SET task = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// The task store: sole authority on task state.
///
/// Every mutating operation is keyed by the stable row id and commits
/// before returning. Updates and deletes that match no row report
/// [`TaskStoreError::NotFound`] instead of silently succeeding.
pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens the store and ensures the `tasks` table exists. Idempotent;
    /// safe to call on every startup.
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a new `Pending` task dated today and returns the stored
    /// record with its assigned id.
    ///
    /// Description validation is the caller's job; the store accepts
    /// whatever it is given.
    pub fn create(&mut self, description: &str) -> Result<Task, TaskStoreError> {
        let date = Local::now().format("%Y-%m-%d").to_string();
        let status = TaskStatus::Pending;
        self.conn.execute(INSERT_TASK, params![description, date, status.as_str()])?;

        Ok(Task {
            id: Some(self.conn.last_insert_rowid()),
            description: description.to_string(),
            date: Some(date),
            status,
        })
    }

    /// Returns every record in storage (insertion) order.
    pub fn list(&mut self) -> Result<Vec<Task>, TaskStoreError> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TASKS)?;
        let task_iter = stmt.query_map([], map_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>, TaskStoreError> {
        self.conn.query_row(SELECT_TASK_BY_ID, params![id], map_task).optional().map_err(Into::into)
    }

    /// Transitions a task's status. Setting the status a record already has
    /// succeeds without complaint.
    pub fn set_status(&mut self, id: i64, status: TaskStatus) -> Result<(), TaskStoreError> {
        let affected = self.conn.execute(UPDATE_TASK_STATUS, params![id, status.as_str()])?;
        if affected == 0 {
            return Err(TaskStoreError::NotFound(id));
        }
        Ok(())
    }

    /// Replaces a task's description. Id, date, and status are untouched.
    pub fn rename(&mut self, id: i64, new_description: &str) -> Result<(), TaskStoreError> {
        let affected = self.conn.execute(RENAME_TASK, params![id, new_description])?;
        if affected == 0 {
            return Err(TaskStoreError::NotFound(id));
        }
        Ok(())
    }

    /// Permanently removes a task. No soft delete, no recovery.
    pub fn delete(&mut self, id: i64) -> Result<(), TaskStoreError> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskStoreError::NotFound(id));
        }
        Ok(())
    }
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let status: String = row.get(3)?;
    let status = status
        .parse::<TaskStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e)))?;

    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        date: row.get(2)?,
        status,
    })
}
