//! A component rendering one of three views depending on the state of an async value.
//!
//! ```no_run
//! use promise_view::ui::components::{PromiseView, Views};
//! use promise_view::ui::core::{Component, TaskManager};
//! use ratatui::widgets::Paragraph;
//!
//! # async fn demo() {
//! let request = async { Ok::<_, String>("body".to_string()) };
//! let (mut tasks, _actions) = TaskManager::new();
//!
//! let mut view = PromiseView::new(
//!     Some(request),
//!     Views::new(
//!         || Paragraph::new("Loading..."),
//!         |text: &String| Paragraph::new(text.clone()),
//!         |error: &String| Paragraph::new(format!("Error: {error}")),
//!     ),
//! );
//! view.mount(&mut tasks);
//! # }
//! ```

use crate::ui::core::{Action, AttachmentGuard, AttachmentId, Component, Outcome, PromiseState, Status, TaskManager};
use ratatui::{layout::Rect, widgets::Widget, Frame};
use std::future::Future;
use std::pin::Pin;
use tokio::sync::mpsc;

type PendingView<V> = Box<dyn Fn() -> V>;
type FulfilledView<T, V> = Box<dyn Fn(&T) -> V>;
type RejectedView<E, V> = Box<dyn Fn(&E) -> V>;

type AsyncValue<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("No view registered for {0}")]
    MissingView(Status),
}

/// The three view-producing functions, one per [`Status`].
pub struct Views<T, E, V> {
    pending: PendingView<V>,
    fulfilled: FulfilledView<T, V>,
    rejected: RejectedView<E, V>,
}

impl<T, E, V> Views<T, E, V> {
    pub fn new(
        pending: impl Fn() -> V + 'static,
        fulfilled: impl Fn(&T) -> V + 'static,
        rejected: impl Fn(&E) -> V + 'static,
    ) -> Self {
        Self {
            pending: Box::new(pending),
            fulfilled: Box::new(fulfilled),
            rejected: Box::new(rejected),
        }
    }

    pub fn builder() -> ViewsBuilder<T, E, V> {
        ViewsBuilder::default()
    }

    /// Invoke the view registered for the status of `state`
    pub fn select(&self, state: &PromiseState<T, E>) -> V {
        match state {
            PromiseState::Pending => (self.pending)(),
            PromiseState::Fulfilled(value) => (self.fulfilled)(value),
            PromiseState::Rejected(reason) => (self.rejected)(reason),
        }
    }
}

/// Assembles [`Views`] one status at a time.
pub struct ViewsBuilder<T, E, V> {
    pending: Option<PendingView<V>>,
    fulfilled: Option<FulfilledView<T, V>>,
    rejected: Option<RejectedView<E, V>>,
}

impl<T, E, V> Default for ViewsBuilder<T, E, V> {
    fn default() -> Self {
        Self {
            pending: None,
            fulfilled: None,
            rejected: None,
        }
    }
}

impl<T, E, V> ViewsBuilder<T, E, V> {
    #[must_use]
    pub fn on_pending(mut self, view: impl Fn() -> V + 'static) -> Self {
        self.pending = Some(Box::new(view));
        self
    }

    #[must_use]
    pub fn on_fulfilled(mut self, view: impl Fn(&T) -> V + 'static) -> Self {
        self.fulfilled = Some(Box::new(view));
        self
    }

    #[must_use]
    pub fn on_rejected(mut self, view: impl Fn(&E) -> V + 'static) -> Self {
        self.rejected = Some(Box::new(view));
        self
    }

    /// Fails with the first status, in declaration order, that has no view
    pub fn build(self) -> Result<Views<T, E, V>, ViewError> {
        Ok(Views {
            pending: self.pending.ok_or(ViewError::MissingView(Status::Pending))?,
            fulfilled: self.fulfilled.ok_or(ViewError::MissingView(Status::Fulfilled))?,
            rejected: self.rejected.ok_or(ViewError::MissingView(Status::Rejected))?,
        })
    }
}

/// Renders the pending, fulfilled or rejected view of a single async value.
pub struct PromiseView<T, E, V> {
    promise: Option<AsyncValue<T, E>>,
    views: Views<T, E, V>,
    state: PromiseState<T, E>,
    guard: Option<AttachmentGuard<T, E>>,
    inbox: Option<mpsc::UnboundedReceiver<Outcome<T, E>>>,
    mounted: bool,
    description: String,
}

impl<T, E, V> PromiseView<T, E, V>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Create a view over `promise`. `None` means there is nothing to wait
    /// for and the pending view is shown for as long as the component lives.
    pub fn new<F>(promise: Option<F>, views: Views<T, E, V>) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            promise: promise.map(|future| Box::pin(future) as AsyncValue<T, E>),
            views,
            state: PromiseState::Pending,
            guard: None,
            inbox: None,
            mounted: false,
            description: "async value".to_string(),
        }
    }

    /// A view with no async value
    pub fn idle(views: Views<T, E, V>) -> Self {
        Self::new(None::<std::future::Pending<Result<T, E>>>, views)
    }

    /// Label used for the background watcher in logs
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Start observing the async value, if there is one.
    ///
    /// Mounting a second time does nothing: an attachment is never renewed.
    pub fn attach(&mut self, tasks: &mut TaskManager) {
        if self.mounted {
            log::debug!("{} is already mounted", self.description);
            return;
        }
        self.mounted = true;

        let Some(promise) = self.promise.take() else {
            log::debug!("{}: nothing to observe, staying {}", self.description, Status::Pending);
            return;
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let guard = AttachmentGuard::new(tasks.next_attachment_id(), tx);
        tasks.spawn_watch(promise, guard.clone(), self.description.clone());

        log::debug!("{} attached as {}", self.description, guard.id());
        self.state = PromiseState::Pending;
        self.guard = Some(guard);
        self.inbox = Some(rx);
    }

    /// Apply every outcome the guard has delivered so far.
    /// Returns whether the state changed.
    pub fn poll_outcomes(&mut self) -> bool {
        let Some(inbox) = self.inbox.as_mut() else {
            return false;
        };

        let mut delivered = Vec::new();
        while let Ok(outcome) = inbox.try_recv() {
            delivered.push(outcome);
        }

        let mut changed = false;
        for outcome in delivered {
            changed |= match outcome {
                Outcome::Fulfilled(value) => self.handle_fulfilled(value),
                Outcome::Rejected(reason) => self.handle_rejected(reason),
            };
        }
        changed
    }

    /// Consume the wake-up posted for this view's attachment, pass anything else through
    pub fn handle_action(&mut self, action: Action) -> Action {
        match action {
            Action::Settled { attachment, .. } if self.attachment_id() == Some(attachment) => {
                if self.poll_outcomes() {
                    Action::Render
                } else {
                    Action::None
                }
            }
            other => other,
        }
    }

    fn handle_fulfilled(&mut self, value: T) -> bool {
        self.transition(PromiseState::Fulfilled(value))
    }

    fn handle_rejected(&mut self, reason: E) -> bool {
        self.transition(PromiseState::Rejected(reason))
    }

    fn transition(&mut self, next: PromiseState<T, E>) -> bool {
        if self.state.status().is_settled() {
            log::warn!(
                "{} already {}, ignoring {}",
                self.description,
                self.state.status(),
                next.status()
            );
            return false;
        }

        log::debug!("{}: {} -> {}", self.description, self.state.status(), next.status());
        self.state = next;
        true
    }
}

impl<T, E, V> PromiseView<T, E, V> {
    /// Produce the output of the view registered for the current status
    pub fn view(&self) -> V {
        self.views.select(&self.state)
    }

    pub fn state(&self) -> &PromiseState<T, E> {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether outcomes of the async value are still honored
    pub fn is_attached(&self) -> bool {
        self.guard.as_ref().is_some_and(AttachmentGuard::is_active)
    }

    /// Whether the view was attached to a value and has since been released.
    /// A view that never had a value is not detached.
    pub fn is_detached(&self) -> bool {
        self.guard.as_ref().is_some_and(|guard| !guard.is_active())
    }

    pub fn attachment_id(&self) -> Option<AttachmentId> {
        self.guard.as_ref().map(AttachmentGuard::id)
    }

    /// Stop honoring outcomes. The async value itself keeps running.
    pub fn detach(&mut self) {
        if let Some(guard) = &self.guard {
            guard.disable();
        }
        self.inbox = None;
    }
}

impl<T, E, V> Drop for PromiseView<T, E, V> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<T, E, V> Component for PromiseView<T, E, V>
where
    T: Send + 'static,
    E: Send + 'static,
    V: Widget,
{
    fn mount(&mut self, tasks: &mut TaskManager) {
        self.attach(tasks);
    }

    fn unmount(&mut self) {
        self.detach();
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        f.render_widget(self.view(), rect);
    }
}
