//! Configuration management for promise-view
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_LOCAL, CONFIG_FILE_NAME, DEFAULT_DEMO_DELAY_MS, DEFAULT_PAYLOAD, DEFAULT_PENDING_TEXT,
    DEFAULT_TICK_RATE_MS, DEFAULT_TITLE, MAX_DEMO_DELAY_MS, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS,
};
use crate::ui::core::Status;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub demo: DemoConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Interval between host loop ticks, in milliseconds
    pub tick_rate_ms: u64,
    /// Title shown on the frame around the view
    pub title: String,
}

/// Simulated request driven by the demo binary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// How long the request takes to settle
    pub delay_ms: u64,
    /// How the request settles: "fulfilled" or "rejected"
    pub outcome: String,
    /// Body on success, reason on failure
    pub payload: String,
    /// Text shown while the request is pending
    pub pending_text: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Maximum level written: off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DEMO_DELAY_MS,
            outcome: "fulfilled".to_string(),
            payload: DEFAULT_PAYLOAD.to_string(),
            pending_text: DEFAULT_PENDING_TEXT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    /// Status the simulated request settles to
    pub fn settles_to(&self) -> Result<Status> {
        let status = Status::from_str(&self.outcome)?;
        if !status.is_settled() {
            anyhow::bail!("demo outcome must be 'fulfilled' or 'rejected', got '{}'", self.outcome);
        }
        Ok(status)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_LOCAL);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.ui.tick_rate_ms) {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                MIN_TICK_RATE_MS,
                MAX_TICK_RATE_MS,
                self.ui.tick_rate_ms
            );
        }

        if self.demo.delay_ms > MAX_DEMO_DELAY_MS {
            anyhow::bail!("delay_ms cannot exceed {} (one minute)", MAX_DEMO_DELAY_MS);
        }

        self.demo.settles_to()?;
        self.logging.level_filter()?;

        Ok(())
    }
}
