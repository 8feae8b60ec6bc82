use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tudu::commands::Cli;
use tudu::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    // Structured log output only when debug mode is requested; the msg_*
    // macros print plain text otherwise.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
