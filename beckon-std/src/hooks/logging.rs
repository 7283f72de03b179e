//! Logging hook for event observation.

use beckon_core::{BoxError, Hook, HookResult, Message};
use std::fmt::Debug;

/// A hook that logs every delivered event at debug level and keeps listening.
///
/// # Example
///
/// ```rust,ignore
/// let _logging = bus.attach(LoggingHook::named("gateway"));
/// ```
pub struct LoggingHook {
    name: &'static str,
}

impl LoggingHook {
    /// Create a new `LoggingHook` with a default name.
    pub fn new() -> Self {
        Self { name: "event" }
    }

    /// Create a new `LoggingHook` with a custom name.
    ///
    /// The name is attached to every log line to identify the bus.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for LoggingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Hook<E> for LoggingHook
where
    E: Message + Debug,
{
    async fn on_event(&self, event: &E) -> Result<HookResult, BoxError> {
        tracing::debug!(name = %self.name, event = ?event, "event delivered");
        Ok(HookResult::Next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestEvent {
        #[allow(dead_code)]
        data: String,
    }

    #[tokio::test]
    async fn test_logging_hook_continues() {
        let hook = LoggingHook::new();
        let event = TestEvent {
            data: "test".into(),
        };

        let result = hook.on_event(&event).await.unwrap();
        assert_eq!(result, HookResult::Next);
    }

    #[tokio::test]
    async fn test_logging_hook_named() {
        let hook = LoggingHook::named("gateway");
        let event = TestEvent {
            data: "test".into(),
        };

        let result = hook.on_event(&event).await.unwrap();
        assert_eq!(result, HookResult::Next);
    }
}
