//! Reusable UI components

pub mod promise_view;
pub mod status_bar;

// Component exports
pub use promise_view::{PromiseView, ViewError, Views, ViewsBuilder};
pub use status_bar::StatusBar;
