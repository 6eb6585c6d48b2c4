//! Tracing setup: stderr plus a per-run log file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform log directory for tilequest.
///
/// - macOS: `~/Library/Caches/tilequest/logs`
/// - Linux: `~/.cache/tilequest/logs` (or `$XDG_CACHE_HOME/tilequest/logs`)
/// - Windows: `%LOCALAPPDATA%\tilequest\logs`
/// - Fallback: `/tmp/tilequest/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tilequest")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/tilequest"))
        .join("logs")
}

/// Install the global subscriber.
///
/// `RUST_LOG` controls the filter (default `info`). Events go to stderr and
/// to `<log_dir>/<run_id>/client.log`. Keep the returned guard alive until
/// exit or buffered file output is lost.
pub fn setup_logging(log_dir: &Path, run_id: &str) -> Result<WorkerGuard> {
    let run_dir = log_dir.join(run_id);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create log directory {}", run_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&run_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(run = run_id, "logging initialized");
    tracing::info!("Log file: {}/client.log", run_dir.display());
    Ok(guard)
}
