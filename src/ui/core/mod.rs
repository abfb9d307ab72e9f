//! Core UI functionality for promise-view.
//!
//! This module contains the building blocks the [`PromiseView`] component and
//! its host loop are made of.
//!
//! # Module Components
//!
//! - [`actions`] - Messages flowing from background tasks and input to components
//! - [`component`] - Base component trait with mount/unmount lifecycle
//! - [`event_handler`] - Terminal input polling and ticks
//! - [`guard`] - Attachment guard that silences outcomes after unmount
//! - [`status`] - Status tag, outcome and component state types
//! - [`task_manager`] - Background tasks awaiting async values
//!
//! # Flow
//!
//! 1. A component is **mounted** with the [`TaskManager`], which spawns a watcher for its async value
//! 2. The watcher awaits the value and forwards the outcome through an [`AttachmentGuard`]
//! 3. The guard delivers it to the component inbox and the manager posts [`Action::Settled`]
//! 4. The host loop passes the action to [`Component::update`], the component drains its inbox and re-renders
//!
//! Unmounting disables the guard, so step 3 becomes a no-op from then on.
//!
//! [`PromiseView`]: crate::ui::components::PromiseView

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod guard;
pub mod status;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use guard::{AttachmentGuard, AttachmentId};
pub use status::{Outcome, ParseStatusError, PromiseState, Status};
pub use task_manager::{TaskId, TaskManager, TaskResult};
