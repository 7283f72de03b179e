//! # beckon - wait for the user, then react
//!
//! `beckon` sits between a live chat connection and command code. The
//! connection pushes gateway events in; command code awaits the next event
//! that matches what it is looking for, with a timeout. Two interactions are
//! built on top of that primitive:
//!
//! - a **confirmation prompt**: accept/reject reactions on a message
//! - a **paginator**: a message whose navigation reactions page through a
//!   result set until the user stops or goes quiet
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use beckon::prelude::*;
//!
//! let coordinator = Coordinator::new(transport, Config::default());
//! tokio::spawn({
//!     let coordinator = coordinator.clone();
//!     async move { coordinator.run(gateway_events).await }
//! });
//!
//! // Inside a command handler
//! let ctx = coordinator.context(Channel::guild(channel_id), author_id);
//! let prompt = ctx.send("Delete everything?").await?;
//! if ctx.confirm(prompt, author_id, None).await? {
//!     // ...
//! }
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod config;
mod context;
mod coordinator;
mod error;
pub mod paginate;
mod permissions;
mod prompt;

pub use config::{Config, ConfigError, EmojiConfig};
pub use context::{Channel, CommandContext};
pub use coordinator::Coordinator;
pub use error::Error;
pub use paginate::{
    ActivePaginations, CleanupStrategy, NavigationAction, NavigationEmojis, PaginationState,
    Paginator,
};
pub use permissions::effective_permissions;

pub use beckon_core::{
    BoxError, ChannelId, ChannelKind, DynHook, Embed, EmbedBuilder, EmbedField, EmojiId,
    GatewayEvent, Hook, HookResult, Listener, Message, MessageContent, MessageId, MessageReceived,
    MessageRef, Permissions, ReactionAdded, ReactionEmoji, TimeoutError, Transport,
    TransportError, UserId, WaitError,
};
pub use beckon_std::{
    EventBus, LoggingHook, MessageListener, PendingWait, ReactionListener, Subscription,
    SubscriptionId,
};

/// Standard listener implementations.
pub mod listeners {
    #![allow(clippy::wildcard_imports)]
    pub use beckon_std::listeners::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use beckon_std::testing::*;
}

/// Prelude module - common imports for beckon.
///
/// # Usage
///
/// ```rust,ignore
/// use beckon::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Channel,
        // Identity
        ChannelId,
        CommandContext,
        Config,
        Coordinator,
        // Content
        Embed,
        EmbedBuilder,
        // Errors
        Error,
        GatewayEvent,
        // Waiting
        Listener,
        MessageContent,
        MessageId,
        MessageListener,
        MessageRef,
        Paginator,
        Permissions,
        ReactionEmoji,
        ReactionListener,
        Transport,
        UserId,
    };
}
