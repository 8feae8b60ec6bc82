//! Core library modules for the tudu application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Data Management**: Task records and their lifecycle
//! - **User Interface**: Console rendering and data export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::db::tasks::Tasks;
//!
//! let mut tasks = Tasks::new()?;
//! let task = tasks.create("Buy milk")?;
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod task;
pub mod view;
