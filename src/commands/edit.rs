use super::list;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to rename
    pub id: i64,
    /// New description; prompts interactively when omitted
    pub description: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match tasks.get_by_id(args.id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    let new_description = match args.description {
        Some(description) => description,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNewDescription.to_string())
            .default(task.description.clone())
            .interact_text()?,
    };
    let new_description = new_description.trim();
    if new_description.is_empty() {
        msg_error!(Message::EmptyTaskDescription);
        return Ok(());
    }

    tasks.rename(args.id, new_description)?;
    msg_success!(Message::TaskRenamed(new_description.to_string()));
    list::render()
}
