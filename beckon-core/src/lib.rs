//! # beckon-core
//!
//! Core traits and domain model for the beckon wait-and-react coordinator.
//!
//! This crate has minimal dependencies and is what transports and plugins
//! import when they only need to speak the vocabulary, not run the bus.
//!
//! # Layers
//!
//! ## Hook ([`Hook`])
//!
//! The lowest-level unit attached to an event bus. Receives an event and
//! reports whether it wants to keep listening (`Next`) or is finished and
//! should be detached (`Stop`).
//!
//! ## Listener ([`Listener`])
//!
//! Interprets raw gateway events: narrows them to one event kind, applies
//! filters, and yields a typed output. Waiters are built from listeners.
//!
//! ## Transport ([`Transport`])
//!
//! The outbound side of the connection: sending and editing messages,
//! managing reactions and resolving channel permissions.
//!
//! # Error Types
//!
//! - [`WaitError`] - a wait ended without a matching event
//! - [`TimeoutError`] - nobody answered before the deadline
//! - [`TransportError`] - an outbound call failed

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod content;
mod emoji;
mod error;
mod event;
mod hook;
mod id;
mod listener;
mod message;
mod permissions;
mod transport;

pub use content::{Embed, EmbedBuilder, EmbedField, MessageContent};
pub use emoji::ReactionEmoji;
pub use error::{BoxError, TimeoutError, TransportError, WaitError};
pub use event::{GatewayEvent, MessageReceived, ReactionAdded};
pub use hook::{DynHook, Hook, HookResult};
pub use id::{ChannelId, EmojiId, MessageId, MessageRef, UserId};
pub use listener::{Filter, Listener, Map};
pub use message::Message;
pub use permissions::{ChannelKind, Permissions};
pub use transport::Transport;
