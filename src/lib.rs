//! promise-view - render an async value as a terminal UI component
//!
//! This library provides [`PromiseView`], a ratatui component that shows one
//! of three caller-supplied views depending on whether a single async value
//! is pending, fulfilled or rejected. Unmounting the component makes any
//! later outcome inert without cancelling the underlying work.
//!
//! # Modules
//!
//! * [`config`] - Configuration for the demo binary
//! * [`constants`] - Application constants and default values
//! * [`logger`] - File logging setup
//! * [`ui`] - The component, its lifecycle plumbing and the demo host

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use ui::components::{PromiseView, ViewError, Views};
pub use ui::core::{AttachmentGuard, Outcome, PromiseState, Status};
