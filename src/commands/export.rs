use crate::libs::export::{ExportFormat, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
    /// Output file path; defaults to tasks_<date>.<ext> in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    Exporter::new(args.format, args.output).export()
}
