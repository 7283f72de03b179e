//! Inbound events pushed by the live connection.

use crate::{
    emoji::ReactionEmoji,
    id::{ChannelId, MessageId, MessageRef, UserId},
};

/// A user added a reaction to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionAdded {
    /// Message that was reacted to.
    pub message_id: MessageId,
    /// Channel of that message.
    pub channel_id: ChannelId,
    /// Who reacted.
    pub user_id: UserId,
    /// The reaction.
    pub emoji: ReactionEmoji,
}

impl ReactionAdded {
    /// The message this reaction belongs to.
    pub fn message(&self) -> MessageRef {
        MessageRef::new(self.channel_id, self.message_id)
    }
}

/// A new message was posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReceived {
    /// The new message.
    pub message_id: MessageId,
    /// Channel it was posted in.
    pub channel_id: ChannelId,
    /// Its author.
    pub author_id: UserId,
    /// Raw text content.
    pub content: String,
}

impl MessageReceived {
    /// Reference to the new message.
    pub fn message(&self) -> MessageRef {
        MessageRef::new(self.channel_id, self.message_id)
    }
}

/// Every event kind the coordinator reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    /// See [`ReactionAdded`].
    ReactionAdded(ReactionAdded),
    /// See [`MessageReceived`].
    MessageReceived(MessageReceived),
}

impl From<ReactionAdded> for GatewayEvent {
    fn from(event: ReactionAdded) -> Self {
        GatewayEvent::ReactionAdded(event)
    }
}

impl From<MessageReceived> for GatewayEvent {
    fn from(event: MessageReceived) -> Self {
        GatewayEvent::MessageReceived(event)
    }
}
