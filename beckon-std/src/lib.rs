//! # beckon-std
//!
//! Standard implementations for beckon.
//!
//! This crate provides:
//! - **Event bus**: [`EventBus`], a shared registry of attached hooks, and the
//!   [`Subscription`] guard that detaches a hook exactly once
//! - **Waiting**: [`PendingWait`], a single-resolution future raced against
//!   an optional deadline
//! - **Standard listeners**: [`ReactionListener`], [`MessageListener`]
//! - **Standard hooks**: [`LoggingHook`]
//! - **Testing**: an in-memory transport and recording helpers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use beckon_core;

pub mod dynamic;
pub mod hooks;
pub mod listeners;
pub mod testing;
pub mod wait;

pub use dynamic::{EventBus, Subscription, SubscriptionId};
pub use hooks::LoggingHook;
pub use listeners::{MessageListener, Predicate, ReactionListener};
pub use wait::PendingWait;
