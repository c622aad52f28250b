//! Terminal registration manager entry point.
mod app;
mod config;
mod input;
mod logging;
mod message;
mod presentation;
mod state;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use presentation::terminal::{self, TerminalGuard};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = TuiConfig::from_env();

    // Keep the guard alive so buffered log lines flush on exit
    let _log_guard = logging::setup_logging()?;

    tracing::info!("Starting rollcall");

    let mut tui = terminal::init()?;
    let _guard = TerminalGuard;

    let result = App::new(config).run(&mut tui);

    terminal::restore()?;
    tracing::info!("rollcall exited");
    result
}
