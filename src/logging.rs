//! Tracing setup
//!
//! Logs go to a file under the config directory so they never fight the
//! alternate screen. Falls back to stderr when the file cannot be opened.
//! Filter via `RUST_LOG`, default `info`.

use crate::config::Config;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging; the returned guard must be held for the process
/// lifetime so buffered lines get flushed on exit.
pub fn init() -> Option<WorkerGuard> {
    let log_file = Config::config_dir().and_then(|dir| {
        let logs = dir.join("logs");
        fs::create_dir_all(&logs).ok()?;
        let path = logs.join("safari-tui.log");
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()
            .map(|f| (f, path))
    });

    match log_file {
        Some((file, path)) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();
            tracing::info!(path = %path.display(), "logging initialized");
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .init();
            tracing::warn!("failed to open log file; logging to stderr");
            None
        }
    }
}
