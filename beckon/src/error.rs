use crate::config::ConfigError;
use beckon_core::{MessageId, TransportError, WaitError};
use thiserror::Error;

/// Errors returned by prompts, paginators and the coordinator.
#[derive(Debug, Error)]
pub enum Error {
    /// A wait ended without an answer.
    #[error(transparent)]
    Wait(#[from] WaitError),

    /// An outbound call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Another paginator already owns this message.
    #[error("message {0} is already being paginated")]
    AlreadyPaginating(MessageId),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Whether this error is a wait that ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Wait(wait) if wait.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beckon_core::TimeoutError;
    use std::time::Duration;

    #[test]
    fn test_is_timeout() {
        let timeout: Error = WaitError::from(TimeoutError::new(Duration::from_secs(1))).into();
        assert!(timeout.is_timeout());

        assert!(!Error::from(WaitError::Closed).is_timeout());
        assert!(!Error::AlreadyPaginating(MessageId::new(1)).is_timeout());
    }

    #[test]
    fn test_display() {
        let error = Error::AlreadyPaginating(MessageId::new(7));
        assert_eq!(error.to_string(), "message 7 is already being paginated");
    }
}
