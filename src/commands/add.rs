use super::list;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Description of the task to add
    pub description: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let description = args.description.trim();
    if description.is_empty() {
        msg_error!(Message::EmptyTaskDescription);
        return Ok(());
    }

    let task = Tasks::new()?.create(description)?;
    msg_success!(Message::TaskAdded(task.description));
    list::render()
}
