//! Constants used throughout the application
//!
//! This module centralizes file names, UI text, and default values.

// Configuration lookup
pub const APP_NAME: &str = "promise-view";
pub const CONFIG_FILE_LOCAL: &str = "promise-view.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "promise-view.log";

// Timing
pub const DEFAULT_TICK_RATE_MS: u64 = 100;
pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 1000;
pub const DEFAULT_DEMO_DELAY_MS: u64 = 1500;
pub const MAX_DEMO_DELAY_MS: u64 = 60_000;

// UI text
pub const DEFAULT_TITLE: &str = "promise-view";
pub const DEFAULT_PENDING_TEXT: &str = "Loading...";
pub const DEFAULT_PAYLOAD: &str = "Hello from the other side of the await";
pub const STATUS_HINTS: &str = "r: restart • u: unmount • q: quit";
pub const STATUS_UNMOUNTED: &str = "Unmounted: the request keeps running, its result will be ignored";
