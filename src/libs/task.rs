use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a status string read from storage is not one of the
/// two known values.
#[derive(Debug, Error)]
#[error("unknown task status '{0}'")]
pub struct ParseStatusError(String);

/// Lifecycle state of a task.
///
/// Stored as plain TEXT (`Pending` / `Completed`) so the table stays
/// readable with any SQLite client and compatible with pre-existing
/// `todo.db` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TaskStatus::Pending),
            "Completed" => Ok(TaskStatus::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A single to-do item.
///
/// `id` and `date` are `None` until the record has been persisted; the
/// store fills both on insert and every record returned from it carries
/// populated values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub description: String,
    pub date: Option<String>,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(description: &str) -> Self {
        Task {
            id: None,
            description: description.to_string(),
            date: None,
            status: TaskStatus::Pending,
        }
    }
}
