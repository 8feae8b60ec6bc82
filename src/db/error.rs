use thiserror::Error;

/// Errors produced by the task store.
///
/// `NotFound` covers mutating operations that target an id with no matching
/// row; everything else is a fault in the underlying SQLite storage.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    #[error("task with ID {0} not found")]
    NotFound(i64),
    #[error("task storage error")]
    Storage(#[from] rusqlite::Error),
}
