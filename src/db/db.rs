use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;

pub const DB_FILE_NAME: &str = "todo.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the task database, creating the backing file and its directory
    /// on first run. The location honors the `data_dir` configuration
    /// override.
    pub fn new() -> Result<Db> {
        let db_file_path = match Config::read()?.data_dir {
            Some(dir) => {
                fs::create_dir_all(&dir)?;
                dir.join(DB_FILE_NAME)
            }
            None => DataStorage::new().get_path(DB_FILE_NAME)?,
        };
        msg_debug!(format!("Opening database at {}", db_file_path.display()));
        let conn = Connection::open(&db_file_path).with_context(|| format!("Failed to open database at {}", db_file_path.display()))?;

        Ok(Db { conn })
    }
}
