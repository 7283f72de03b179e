//! Reactions added to one message.

use super::Predicate;
use beckon_core::{GatewayEvent, Listener, MessageId, ReactionAdded, ReactionEmoji, UserId};

/// Accepts reactions added to a single message.
///
/// # Example
///
/// ```rust,ignore
/// // Only the invoking user, only the two prompt emoji
/// let listener = ReactionListener::on(message.message_id)
///     .by(author)
///     .one_of([accept, reject]);
/// ```
pub struct ReactionListener {
    message_id: MessageId,
    user: Option<UserId>,
    predicate: Option<Predicate<ReactionAdded>>,
}

impl ReactionListener {
    /// Accept reactions on `message_id`, from anyone.
    pub fn on(message_id: MessageId) -> Self {
        Self {
            message_id,
            user: None,
            predicate: None,
        }
    }

    /// Only accept reactions from `user`.
    pub fn by(mut self, user: UserId) -> Self {
        self.user = Some(user);
        self
    }

    /// Only accept reactions for which `predicate` returns `true`.
    ///
    /// Replaces any predicate set earlier.
    pub fn matching<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&ReactionAdded) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Only accept the given emoji.
    pub fn one_of(self, emojis: impl IntoIterator<Item = ReactionEmoji>) -> Self {
        let emojis: Vec<ReactionEmoji> = emojis.into_iter().collect();
        self.matching(move |reaction| emojis.contains(&reaction.emoji))
    }
}

impl Listener<GatewayEvent> for ReactionListener {
    type Output = ReactionAdded;

    fn listen(&self, event: &GatewayEvent) -> Option<ReactionAdded> {
        let GatewayEvent::ReactionAdded(reaction) = event else {
            return None;
        };
        if reaction.message_id != self.message_id {
            return None;
        }
        if self.user.is_some_and(|user| user != reaction.user_id) {
            return None;
        }
        if let Some(predicate) = &self.predicate
            && !predicate(reaction)
        {
            return None;
        }
        Some(reaction.clone())
    }
}
