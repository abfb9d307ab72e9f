use super::guard::AttachmentId;
use super::status::Status;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Async value lifecycle
    Settled { attachment: AttachmentId, status: Status },
    Restart,
    Detach,

    // UI
    Render,
    Quit,

    None,
}
