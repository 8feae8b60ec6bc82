use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    render()
}

/// Re-queries the store and redraws the whole table.
///
/// Mutating commands call this after every change; there is no incremental
/// update of previously printed output.
pub fn render() -> Result<()> {
    let tasks = Tasks::new()?.list()?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)
}
