use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the full task list as a table.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "DATE", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id.unwrap_or(0), task.description, task.date.as_deref().unwrap_or("-"), task.status]);
        }
        table.printstd();

        Ok(())
    }
}
