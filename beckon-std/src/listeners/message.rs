//! New messages in one channel.

use super::Predicate;
use beckon_core::{ChannelId, GatewayEvent, Listener, MessageReceived, UserId};

/// Accepts messages posted in a single channel.
pub struct MessageListener {
    channel_id: ChannelId,
    author: Option<UserId>,
    predicate: Option<Predicate<MessageReceived>>,
}

impl MessageListener {
    /// Accept messages in `channel_id`, from anyone.
    pub fn in_channel(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            author: None,
            predicate: None,
        }
    }

    /// Only accept messages written by `author`.
    pub fn by(mut self, author: UserId) -> Self {
        self.author = Some(author);
        self
    }

    /// Only accept messages for which `predicate` returns `true`.
    ///
    /// Replaces any predicate set earlier.
    pub fn matching<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&MessageReceived) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }
}

impl Listener<GatewayEvent> for MessageListener {
    type Output = MessageReceived;

    fn listen(&self, event: &GatewayEvent) -> Option<MessageReceived> {
        let GatewayEvent::MessageReceived(message) = event else {
            return None;
        };
        if message.channel_id != self.channel_id {
            return None;
        }
        if self.author.is_some_and(|author| author != message.author_id) {
            return None;
        }
        if let Some(predicate) = &self.predicate
            && !predicate(message)
        {
            return None;
        }
        Some(message.clone())
    }
}
