//! # Transport
//!
//! The outbound half of the chat connection. Everything here is a plain
//! request/response call; the inbound half is the event stream fed into the
//! bus.
//!
//! Implementations are expected to surface permission failures as
//! [`TransportError::PermissionDenied`] so best-effort callers can tell them
//! apart from real outages.

use crate::{
    content::MessageContent,
    emoji::ReactionEmoji,
    error::TransportError,
    id::{ChannelId, MessageRef, UserId},
    permissions::Permissions,
};
use async_trait::async_trait;

/// Outbound calls against the chat service.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// The bot's own user id.
    fn current_user(&self) -> UserId;

    /// Post a new message.
    async fn send(
        &self,
        channel: ChannelId,
        content: MessageContent,
    ) -> Result<MessageRef, TransportError>;

    /// Replace the content of a message the bot posted.
    async fn edit(&self, message: MessageRef, content: MessageContent)
    -> Result<(), TransportError>;

    /// React to a message with each emoji, in order.
    async fn add_reactions(
        &self,
        message: MessageRef,
        emojis: &[ReactionEmoji],
    ) -> Result<(), TransportError>;

    /// Remove one user's reaction.
    async fn remove_reaction(
        &self,
        message: MessageRef,
        emoji: &ReactionEmoji,
        user: UserId,
    ) -> Result<(), TransportError>;

    /// Remove every reaction from a message.
    async fn remove_all_reactions(&self, message: MessageRef) -> Result<(), TransportError>;

    /// Remove the bot's own reactions for each emoji.
    async fn remove_own_reactions(
        &self,
        message: MessageRef,
        emojis: &[ReactionEmoji],
    ) -> Result<(), TransportError>;

    /// Resolve `user`'s effective permissions in a guild channel.
    async fn effective_permissions(
        &self,
        channel: ChannelId,
        user: UserId,
    ) -> Result<Permissions, TransportError>;
}
