//! Error types for beckon.
//!
//! - [`WaitError`] - a wait ended without a matching event
//! - [`TimeoutError`] - the deadline passed with no qualifying event
//! - [`TransportError`] - an outbound call to the chat service failed

use crate::{id::MessageId, permissions::Permissions};
use std::time::Duration;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// No qualifying event arrived before the deadline.
///
/// Kept distinct from every other failure so callers can tell "nobody
/// answered" apart from a broken connection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no matching event within {duration:?}")]
pub struct TimeoutError {
    duration: Duration,
}

impl TimeoutError {
    /// Create a new timeout error.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// The deadline that was exceeded.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Errors that end a wait without a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitError {
    /// The deadline passed.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    /// The event bus was dropped while the wait was pending.
    #[error("event bus closed before a matching event arrived")]
    Closed,
}

impl WaitError {
    /// Whether this wait ended because nobody answered in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, WaitError::Timeout(_))
    }
}

/// Errors returned by a [`Transport`](crate::Transport).
#[derive(Error, Debug)]
pub enum TransportError {
    /// The bot lacks a permission required for the call.
    #[error("missing permissions: {0:?}")]
    PermissionDenied(Permissions),

    /// The message does not exist (or is no longer visible).
    #[error("unknown message {0}")]
    UnknownMessage(MessageId),

    /// The request failed for any other reason.
    #[error("request failed")]
    Request(#[source] BoxError),
}

impl From<BoxError> for TransportError {
    fn from(err: BoxError) -> Self {
        TransportError::Request(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_error_display() {
        let error = TimeoutError::new(Duration::from_secs(60));
        assert!(error.to_string().contains("60s"));
        assert_eq!(error.duration(), Duration::from_secs(60));
    }

    #[test]
    fn test_wait_error_is_timeout() {
        let timeout: WaitError = TimeoutError::new(Duration::from_millis(5)).into();
        assert!(timeout.is_timeout());
        assert!(!WaitError::Closed.is_timeout());
    }
}
