//! Display implementation for tudu application messages.
//!
//! The single source of truth for all user-facing text. Every `Message`
//! variant is rendered here, so wording changes and future localization
//! touch exactly one file.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(description) => format!("Task '{}' added.", description),
            Message::TaskCompleted(id) => format!("Task {} marked as completed.", id),
            Message::TaskAlreadyCompleted(id) => format!("Task {} is already completed.", id),
            Message::TaskRenamed(description) => format!("Task renamed to '{}'.", description),
            Message::TaskDeleted(id) => format!("Task {} deleted.", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::EmptyTaskDescription => "Task description cannot be empty!".to_string(),
            Message::ConfirmDeleteTask(description) => format!("Are you sure you want to delete task '{}'?", description),
            Message::PromptTaskDescription => "Task description".to_string(),
            Message::PromptNewDescription => "New description".to_string(),
            Message::SelectTask => "Select a task".to_string(),
            Message::SelectAction => "What would you like to do?".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReadError(path) => format!("Failed to read configuration file: {}", path),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file: {}", path),
            Message::PromptDataDir => "Data directory (leave empty for the default)".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported successfully to: {}", path),
            Message::NoTasksToExport => "No tasks to export.".to_string(),
        };
        write!(f, "{}", message)
    }
}
