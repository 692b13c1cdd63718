//! Tracing setup.
//!
//! The terminal belongs to the editor while it runs, so log output can only
//! go to a file. Without a configured log file no subscriber is installed and
//! the `tracing` macros in the core are no-ops.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` when set, otherwise `default_level`.
fn env_filter(default_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("Invalid log level '{}'", default_level))
}

/// Installs a global fmt subscriber appending to `log_file` through a
/// background writer.
///
/// Returns `Ok(None)` without doing anything when `log_file` is `None`.
/// Otherwise the returned guard must be kept alive; dropping it flushes and
/// stops the writer.
///
/// # Errors
///
/// Fails when the file cannot be opened, the level does not parse, or a
/// global subscriber is already installed.
pub fn init(log_file: Option<&Path>, default_level: &str) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level)?)
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install log subscriber: {}", err))?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_installs_nothing() {
        assert!(init(None, "info").unwrap().is_none());
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        assert!(init(Some(Path::new("/")), "info").is_err());
    }

    #[test]
    fn test_bad_level_is_rejected() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(env_filter("vincent=loudest").is_err());
        }
    }
}
