//! Lifecycle status of an async value and the state carried with it.

use std::fmt;
use std::str::FromStr;

/// The three lifecycle states an async value can be observed in.
///
/// A status doubles as the key under which a view is registered on
/// [`Views`](crate::ui::components::promise_view::Views).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Pending,
    Fulfilled,
    Rejected,
}

impl Status {
    /// Property key used when views are addressed by name
    pub fn key(self) -> &'static str {
        match self {
            Status::Pending => "onPending",
            Status::Fulfilled => "onFulfilled",
            Status::Rejected => "onRejected",
        }
    }

    pub fn is_settled(self) -> bool {
        !matches!(self, Status::Pending)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown status '{0}', expected one of: onPending, onFulfilled, onRejected")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed
            .strip_prefix("on")
            .or_else(|| trimmed.strip_prefix("On"))
            .unwrap_or(trimmed);

        match bare.to_ascii_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "fulfilled" => Ok(Status::Fulfilled),
            "rejected" => Ok(Status::Rejected),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Outcome delivered once an async value settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Fulfilled(T),
    Rejected(E),
}

impl<T, E> Outcome<T, E> {
    pub fn status(&self) -> Status {
        match self {
            Outcome::Fulfilled(_) => Status::Fulfilled,
            Outcome::Rejected(_) => Status::Rejected,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Fulfilled(value),
            Err(reason) => Outcome::Rejected(reason),
        }
    }
}

/// Component state: the current status together with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PromiseState<T, E> {
    #[default]
    Pending,
    Fulfilled(T),
    Rejected(E),
}

impl<T, E> PromiseState<T, E> {
    pub fn status(&self) -> Status {
        match self {
            PromiseState::Pending => Status::Pending,
            PromiseState::Fulfilled(_) => Status::Fulfilled,
            PromiseState::Rejected(_) => Status::Rejected,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PromiseState::Pending)
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, PromiseState::Fulfilled(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, PromiseState::Rejected(_))
    }
}

impl<T, E> From<Outcome<T, E>> for PromiseState<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Fulfilled(value) => PromiseState::Fulfilled(value),
            Outcome::Rejected(reason) => PromiseState::Rejected(reason),
        }
    }
}
