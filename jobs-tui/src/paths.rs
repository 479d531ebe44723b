//! Where the builder keeps its settings and logs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use directories::ProjectDirs;

/// Name of the log written by the running session.
pub const LATEST_LOG: &str = "latest.log";

/// Archived logs kept next to the current one.
const KEPT_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "jobs", "jobs-builder")
}

/// `settings.toml` in the platform config directory.
pub fn settings_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("settings.toml"))
}

/// Cache directory holding the current log and its archives.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Archive the previous session's log and prune the oldest archives.
///
/// The archive is named after the time the previous log was last written,
/// e.g. `20250102_134501.log`, so archives sort by name.
pub fn rotate_logs(dir: &Path) {
    let latest = dir.join(LATEST_LOG);
    if let Ok(meta) = fs::metadata(&latest) {
        let written: DateTime<Local> = meta.modified().unwrap_or_else(|_| SystemTime::now()).into();
        let archived = dir.join(written.format("%Y%m%d_%H%M%S.log").to_string());
        if let Err(e) = fs::rename(&latest, &archived) {
            eprintln!("Could not archive {}: {}", latest.display(), e);
        }
    }

    prune_archives(dir, KEPT_LOGS);
}

fn prune_archives(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .collect();
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for path in &archives[..excess] {
        let _ = fs::remove_file(path);
    }
}
