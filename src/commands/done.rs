use super::list;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskStatus;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// ID of the task to mark as completed
    pub id: i64,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;
    match tasks.get_by_id(args.id)? {
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
        Some(task) if task.status == TaskStatus::Completed => {
            msg_info!(Message::TaskAlreadyCompleted(args.id));
        }
        Some(_) => {
            tasks.set_status(args.id, TaskStatus::Completed)?;
            msg_success!(Message::TaskCompleted(args.id));
        }
    }

    list::render()
}
