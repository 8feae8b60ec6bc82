//! Task list export for backup and external tools.
//!
//! Dumps the full task table to CSV, pretty-printed JSON, or an Excel
//! worksheet. The output file defaults to `tasks_<date>.<ext>` in the
//! current directory and can be overridden per invocation.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per task.
    Csv,
    /// Pretty-printed JSON array.
    Json,
    /// Excel worksheet with a bold header row.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Flattened task record used for serialization.
///
/// Field names match the table columns so exported files mirror the
/// on-disk schema.
#[derive(Debug, Serialize)]
struct ExportTask {
    id: i64,
    task: String,
    date: String,
    status: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.unwrap_or(0),
            task: task.description.clone(),
            date: task.date.clone().unwrap_or_default(),
            status: task.status.to_string(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Exports every task to the chosen format.
    ///
    /// An empty store produces an informational message and no file.
    pub fn export(&self) -> Result<()> {
        let tasks = Tasks::new()?.list()?;
        if tasks.is_empty() {
            msg_info!(Message::NoTasksToExport);
            return Ok(());
        }

        let rows: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();
        let path = self.output_path();

        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&path)?;
                for row in &rows {
                    wtr.serialize(row)?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                fs::write(&path, json)?;
            }
            ExportFormat::Excel => {
                self.write_excel(&rows, &path)?;
            }
        }

        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(())
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("tasks_{}.{}", Local::now().format("%Y-%m-%d"), self.format.extension())))
    }

    fn write_excel(&self, rows: &[ExportTask], path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        worksheet.write_string_with_format(0, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Task", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Date", &header_format)?;
        worksheet.write_string_with_format(0, 3, "Status", &header_format)?;

        for (i, task) in rows.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet.write_number(row, 0, task.id as f64)?;
            worksheet.write_string(row, 1, &task.task)?;
            worksheet.write_string(row, 2, &task.date)?;
            worksheet.write_string(row, 3, &task.status)?;
        }

        workbook.save(path)?;
        Ok(())
    }
}
