//! File logging for the TUI.
//!
//! Raw mode owns the terminal, so diagnostics go to a log file instead of
//! stderr.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initializes the tracing subscriber with a non-blocking file writer.
///
/// Returns the writer guard; the caller keeps it alive for the life of the
/// process so buffered lines are flushed on exit.
pub fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = resolve_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "rollcall.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // File layer only: stderr would tear the alternate screen.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: {}/rollcall.log", log_dir.display());

    Ok(guard)
}

/// Platform-specific log directory, overridable with `ROLLCALL_LOG_DIR`.
fn resolve_log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os("ROLLCALL_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push("Library");
            path.push("Caches");
            path.push("rollcall");
            path.push("logs");
            return path;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            let mut path = PathBuf::from(xdg_cache);
            path.push("rollcall");
            path.push("logs");
            return path;
        } else if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push(".cache");
            path.push("rollcall");
            path.push("logs");
            return path;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            let mut path = PathBuf::from(local_appdata);
            path.push("rollcall");
            path.push("logs");
            return path;
        }
    }

    // Fallback
    PathBuf::from("/tmp/rollcall/logs")
}
