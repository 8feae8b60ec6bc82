use super::list;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    pub id: i64,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    let task = match tasks.get_by_id(args.id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.description).to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    tasks.delete(args.id)?;
    msg_success!(Message::TaskDeleted(args.id));
    list::render()
}
