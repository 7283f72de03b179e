//! Standard listeners over [`GatewayEvent`](beckon_core::GatewayEvent).
//!
//! Each listener narrows the gateway stream to one event kind and then
//! filters in a fixed order: target (message or channel), then the acting
//! user if one was set, then the predicate if one was set.

pub mod message;
pub mod reaction;

pub use message::MessageListener;
pub use reaction::ReactionListener;

/// Boxed predicate over an event payload.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;
