//! # Hook
//!
//! The unit attached to an event bus.
//!
//! A hook sees every event delivered on the bus it is attached to and decides
//! on its own whether the event is relevant. Hooks never coordinate with each
//! other: a hook that does not care about an event returns
//! [`HookResult::Next`] and has no side effect.
//!
//! # Use Cases
//!
//! - One-shot waiters that resolve a pending future and then detach
//! - Observers (logging, recording in tests)

use crate::{error::BoxError, message::Message};
use std::{future::Future, pin::Pin};

/// Result of delivering an event to a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookResult {
    /// Keep the hook attached and deliver the next event to it.
    Next,
    /// The hook is finished; the bus detaches it before the next delivery.
    Stop,
}

/// A handler attached to an event bus.
///
/// This trait uses native `async fn` for static dispatch. Registries store
/// hooks as [`DynHook`] trait objects.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Hook<{E}>`",
    label = "missing `Hook` implementation",
    note = "Hooks must implement `on_event` for the specific event type `{E}`."
)]
pub trait Hook<E: Message>: Send + Sync + 'static {
    /// Called for every event delivered on the bus.
    fn on_event(&self, event: &E) -> impl Future<Output = Result<HookResult, BoxError>> + Send;
}

/// Object-safe version of [`Hook`].
pub trait DynHook<E: Message>: Send + Sync + 'static {
    /// Called for every event delivered on the bus (dynamic dispatch version).
    fn on_event_dyn<'a>(
        &'a self,
        event: &'a E,
    ) -> Pin<Box<dyn Future<Output = Result<HookResult, BoxError>> + Send + 'a>>;
}

impl<E: Message, T: Hook<E>> DynHook<E> for T {
    fn on_event_dyn<'a>(
        &'a self,
        event: &'a E,
    ) -> Pin<Box<dyn Future<Output = Result<HookResult, BoxError>> + Send + 'a>> {
        Box::pin(self.on_event(event))
    }
}
