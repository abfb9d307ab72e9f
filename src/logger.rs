//! File logging for the terminal app.
//!
//! Stdout belongs to the TUI, so log records go to a file under the user's
//! cache directory, and only when logging is enabled in the config.

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

/// Where log records are written
pub fn get_log_file_path() -> Result<PathBuf> {
    let base = dirs::cache_dir()
        .or_else(dirs::data_local_dir)
        .context("Could not determine a cache directory for the log file")?;
    Ok(base.join(APP_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatcher without installing it
pub fn dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level))
}

/// Install the global logger. Returns the log file path, or `None` when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    dispatch(config)?
        .chain(file)
        .apply()
        .context("A global logger is already installed")?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}
