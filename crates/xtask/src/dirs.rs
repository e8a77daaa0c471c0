//! Platform-specific directory utilities
//!
//! Must agree with the client's `logging::log_dir`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the platform-specific log directory for the lane runner
///
/// - macOS: `~/Library/Caches/lane-runner/logs`
/// - Linux: `~/.cache/lane-runner/logs` (or `$XDG_CACHE_HOME/lane-runner/logs`)
/// - Windows: `%LOCALAPPDATA%\lane-runner\logs`
/// - Fallback: `<tmp>/lane-runner/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "lane-runner")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("lane-runner"))
        .join("logs")
}

/// List all session directories in the log directory
///
/// Returns (session_id, path) tuples, newest first.
pub fn list_sessions(log_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !log_dir.exists() {
        return Ok(Vec::new());
    }

    let mut sessions: Vec<(String, PathBuf, std::time::SystemTime)> = Vec::new();

    for entry in std::fs::read_dir(log_dir)
        .with_context(|| format!("Failed to read log directory: {}", log_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir()
            && let Some(session_id) = path.file_name().and_then(|n| n.to_str())
        {
            let modified = entry.metadata()?.modified()?;
            sessions.push((session_id.to_string(), path.clone(), modified));
        }
    }

    sessions.sort_by(|a, b| b.2.cmp(&a.2));

    Ok(sessions
        .into_iter()
        .map(|(id, path, _)| (id, path))
        .collect())
}

/// Find the log file for a specific session
pub fn find_session_log(log_dir: &Path, session_id: &str) -> Result<PathBuf> {
    let log_path = log_dir.join(session_id).join("client.log");

    if !log_path.exists() {
        anyhow::bail!("Log file not found: {}", log_path.display());
    }

    Ok(log_path)
}

/// Find the most recent session's log file
pub fn find_latest_log(log_dir: &Path) -> Result<(String, PathBuf)> {
    let sessions = list_sessions(log_dir)?;

    let Some((session_id, session_path)) = sessions.first() else {
        anyhow::bail!("No sessions found in log directory");
    };
    let log_path = session_path.join("client.log");

    if !log_path.exists() {
        anyhow::bail!(
            "Log file not found for latest session: {}",
            log_path.display()
        );
    }

    Ok((session_id.clone(), log_path))
}
