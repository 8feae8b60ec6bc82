//! Database layer for the tudu application.
//!
//! A thin persistence layer over a single SQLite table. The schema matches
//! the classic `todo.db` layout (`id`, `task`, `date`, `status`) so existing
//! data files keep working.

/// Database connection management.
pub mod db;

/// Task store error types.
pub mod error;

/// CRUD operations over the task table.
pub mod tasks;
