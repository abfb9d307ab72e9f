use super::status::Outcome;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

pub type AttachmentId = u64;

/// Cancellation token binding an async value's outcome to one mounted component.
///
/// The guard forwards at most what it is given while active. Once
/// [`disable`](AttachmentGuard::disable) has been called every forward is a
/// no-op, permanently. Clones share the same flag, so the copy held by the
/// watcher task goes inert together with the component's copy.
#[derive(Debug)]
pub struct AttachmentGuard<T, E> {
    id: AttachmentId,
    active: Arc<AtomicBool>,
    sender: mpsc::UnboundedSender<Outcome<T, E>>,
}

impl<T, E> Clone for AttachmentGuard<T, E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            active: Arc::clone(&self.active),
            sender: self.sender.clone(),
        }
    }
}

impl<T, E> AttachmentGuard<T, E> {
    pub fn new(id: AttachmentId, sender: mpsc::UnboundedSender<Outcome<T, E>>) -> Self {
        Self {
            id,
            active: Arc::new(AtomicBool::new(true)),
            sender,
        }
    }

    pub fn id(&self) -> AttachmentId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Forward a success payload; returns whether it reached the component
    pub fn on_fulfilled(&self, value: T) -> bool {
        self.forward(Outcome::Fulfilled(value))
    }

    /// Forward a failure payload; returns whether it reached the component
    pub fn on_rejected(&self, reason: E) -> bool {
        self.forward(Outcome::Rejected(reason))
    }

    pub fn forward(&self, outcome: Outcome<T, E>) -> bool {
        if !self.is_active() {
            log::debug!("Attachment {} is disabled, dropping {}", self.id, outcome.status());
            return false;
        }

        // The receiver goes away with the component
        self.sender.send(outcome).is_ok()
    }

    /// Release the component. Safe to call more than once.
    pub fn disable(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            log::debug!("Attachment {} disabled", self.id);
        }
    }
}
