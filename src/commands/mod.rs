pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod menu;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks")]
    List,
    #[command(about = "Mark a task as completed")]
    Done(done::DoneArgs),
    #[command(about = "Rename a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Export tasks to a file")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Add(args)) => add::cmd(args),
            Some(Commands::List) => list::cmd(),
            Some(Commands::Done(args)) => done::cmd(args),
            Some(Commands::Edit(args)) => edit::cmd(args),
            Some(Commands::Delete(args)) => delete::cmd(args),
            Some(Commands::Export(args)) => export::cmd(args),
            Some(Commands::Init(args)) => init::cmd(args),
            None => menu::cmd(),
        }
    }
}
