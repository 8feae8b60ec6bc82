//! Interactive menu shown when tudu is launched without a subcommand.
//!
//! Mirrors a single-window workflow: the current list is rendered, then one
//! action is chosen per loop iteration. Actions that operate on a row first
//! require picking a task from the current list, so there is no "nothing
//! selected" state to guard against.

use super::{add, delete, done, edit, list};
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

const ACTIONS: &[&str] = &["Add task", "List tasks", "Mark complete", "Rename task", "Delete task", "Quit"];

pub fn cmd() -> Result<()> {
    list::render()?;

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(ACTIONS)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let description: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptTaskDescription.to_string())
                    .allow_empty(true)
                    .interact_text()?;
                add::cmd(add::AddArgs { description })?;
            }
            1 => list::cmd()?,
            2 => {
                if let Some(id) = select_task()? {
                    done::cmd(done::DoneArgs { id })?;
                }
            }
            3 => {
                if let Some(id) = select_task()? {
                    edit::cmd(edit::EditArgs { id, description: None })?;
                }
            }
            4 => {
                if let Some(id) = select_task()? {
                    delete::cmd(delete::DeleteArgs { id })?;
                }
            }
            _ => break,
        }
    }

    Ok(())
}

/// Presents the current list for selection; `None` when the store is empty.
fn select_task() -> Result<Option<i64>> {
    let tasks = Tasks::new()?.list()?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(None);
    }

    let labels: Vec<String> = tasks
        .iter()
        .map(|task| format!("{}: {} [{}]", task.id.unwrap_or(0), task.description, task.status))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTask.to_string())
        .items(&labels)
        .interact()?;

    Ok(tasks[selection].id)
}
