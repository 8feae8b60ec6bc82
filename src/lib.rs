//! # Tudu - a tiny to-do list manager
//!
//! A command-line to-do list backed by a local SQLite table. Add tasks,
//! mark them complete, rename or delete them, and export the list.
//!
//! ## Features
//!
//! - **Task Management**: Create, complete, rename, and delete tasks
//! - **Interactive Menu**: The full workflow without memorizing subcommands
//! - **Data Export**: Dump the task list to CSV, JSON, or Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
