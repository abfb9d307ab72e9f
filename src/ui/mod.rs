//! UI module for promise-view
//!
//! [`core`] holds the component trait, the attachment guard and the task
//! manager; [`components`] holds [`PromiseView`](components::PromiseView)
//! itself; the rest is the terminal demo host.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;

pub use app_component::AppComponent;
pub use renderer::run_app;
