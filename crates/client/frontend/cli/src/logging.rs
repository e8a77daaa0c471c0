//! File logging for the terminal client.
//!
//! The TUI owns stdout, so logs go to
//! `<cache dir>/lane-runner/logs/<session>/client.log`; follow them with
//! `cargo xtask tail-logs`.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform cache directory holding one sub-directory per session.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "lane-runner")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("lane-runner"))
        .join("logs")
}

/// Installs the global subscriber and returns the session's log file.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn setup_logging(session_id: Option<&str>) -> Result<PathBuf> {
    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        chrono::Local::now()
            .format("session_%Y%m%d_%H%M%S")
            .to_string()
    });

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // ANSI kept for colourised tail-logs.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    // Writer must outlive main.
    std::mem::forget(guard);

    let log_file = session_log_dir.join("client.log");
    tracing::info!(session = %session_id, file = %log_file.display(), "Logging initialized");
    Ok(log_file)
}
