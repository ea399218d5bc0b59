//! File-only tracing setup. The terminal belongs to the game, so nothing is
//! logged to stdout or stderr.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "beesinthetrap.log";

/// Installs the global subscriber writing to `<log_dir>/beesinthetrap.log`.
///
/// Without an explicit directory the platform cache directory is used. The
/// returned guard flushes pending lines on drop and must outlive the session.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let log_dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());

    Ok(guard)
}

/// Platform cache directory, e.g. `~/.cache/beesinthetrap/logs` on Linux.
fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "beesinthetrap")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("beesinthetrap").join("logs"))
}
