//! Testing utilities for beckon.
//!
//! - [`MockTransport`]: an in-memory [`Transport`] that records every call and
//!   tracks which reactions sit on which message
//! - [`RecordingHook`]: a hook that records all events it receives
//! - [`wait_for_subscribers`]: yield until a bus has a given number of hooks

use crate::dynamic::EventBus;
use async_trait::async_trait;
use beckon_core::{
    BoxError, ChannelId, GatewayEvent, Hook, HookResult, Message, MessageContent, MessageId,
    MessageReceived, MessageRef, Permissions, ReactionAdded, ReactionEmoji, Transport,
    TransportError, UserId,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

// ============================================================================
// Mock Transport
// ============================================================================

/// One outbound call seen by a [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    /// `send`
    Send {
        /// The message that was created.
        message: MessageRef,
        /// Its content.
        content: MessageContent,
    },
    /// `edit`
    Edit {
        /// The edited message.
        message: MessageRef,
        /// Its new content.
        content: MessageContent,
    },
    /// `add_reactions`
    AddReactions {
        /// Target message.
        message: MessageRef,
        /// Emoji, in the order they were added.
        emojis: Vec<ReactionEmoji>,
    },
    /// `remove_reaction`
    RemoveReaction {
        /// Target message.
        message: MessageRef,
        /// Removed emoji.
        emoji: ReactionEmoji,
        /// Whose reaction.
        user: UserId,
    },
    /// `remove_all_reactions`
    RemoveAllReactions {
        /// Target message.
        message: MessageRef,
    },
    /// `remove_own_reactions`
    RemoveOwnReactions {
        /// Target message.
        message: MessageRef,
        /// Emoji whose bot reaction was removed.
        emojis: Vec<ReactionEmoji>,
    },
    /// `effective_permissions`
    EffectivePermissions {
        /// Queried channel.
        channel: ChannelId,
        /// Queried user.
        user: UserId,
    },
}

struct MockState {
    calls: Vec<TransportCall>,
    contents: HashMap<MessageId, MessageContent>,
    reactions: HashMap<MessageId, Vec<(ReactionEmoji, UserId)>>,
    permissions: Permissions,
    next_message_id: u64,
    fail_edits: bool,
}

/// An in-memory transport.
///
/// Removing somebody else's reaction, or all reactions, requires
/// [`Permissions::MANAGE_MESSAGES`] in the configured permission set and
/// fails with [`TransportError::PermissionDenied`] otherwise, like the real
/// service does.
///
/// # Example
///
/// ```rust,ignore
/// let transport = MockTransport::new(UserId::new(1))
///     .with_permissions(Permissions::all());
///
/// // Later, simulate a user clicking a reaction
/// let event = transport.react(message, "\u{27A1}".into(), UserId::new(7));
/// bus.dispatch(&event).await;
/// ```
#[derive(Clone)]
pub struct MockTransport {
    bot: UserId,
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Create a transport whose bot user is `bot`.
    ///
    /// Starts with the permissions a plain member has: view, send, embed,
    /// history and add reactions.
    pub fn new(bot: UserId) -> Self {
        let state = MockState {
            calls: Vec::new(),
            contents: HashMap::new(),
            reactions: HashMap::new(),
            permissions: Permissions::VIEW_CHANNEL
                | Permissions::SEND_MESSAGES
                | Permissions::EMBED_LINKS
                | Permissions::READ_MESSAGE_HISTORY
                | Permissions::ADD_REACTIONS,
            next_message_id: 1000,
            fail_edits: false,
        };
        Self {
            bot,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Replace the bot's permission set.
    pub fn with_permissions(self, permissions: Permissions) -> Self {
        self.set_permissions(permissions);
        self
    }

    /// Replace the bot's permission set.
    pub fn set_permissions(&self, permissions: Permissions) {
        self.state.lock().unwrap().permissions = permissions;
    }

    /// Make every following `edit` fail with a request error.
    pub fn fail_edits(&self) {
        self.state.lock().unwrap().fail_edits = true;
    }

    /// Put a message on record without going through `send`.
    pub fn seed_message(&self, channel: ChannelId, content: MessageContent) -> MessageRef {
        let mut state = self.state.lock().unwrap();
        let message = MessageRef::new(channel, MessageId::new(state.next_message_id));
        state.next_message_id += 1;
        state.contents.insert(message.message_id, content);
        message
    }

    /// Record `user`'s reaction on a message and return the matching event.
    pub fn react(&self, message: MessageRef, emoji: ReactionEmoji, user: UserId) -> GatewayEvent {
        self.state
            .lock()
            .unwrap()
            .reactions
            .entry(message.message_id)
            .or_default()
            .push((emoji.clone(), user));
        reaction(message, user, emoji)
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<TransportCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Every message created through `send`.
    pub fn sent(&self) -> Vec<MessageRef> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::Send { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Number of successful edits of `message`.
    pub fn edit_count(&self, message: MessageRef) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, TransportCall::Edit { message: m, .. } if *m == message))
            .count()
    }

    /// Current content of a message.
    pub fn content(&self, message: MessageRef) -> Option<MessageContent> {
        self.state
            .lock()
            .unwrap()
            .contents
            .get(&message.message_id)
            .cloned()
    }

    /// Current reactions on a message, in the order they were added.
    pub fn reactions(&self, message: MessageRef) -> Vec<(ReactionEmoji, UserId)> {
        self.state
            .lock()
            .unwrap()
            .reactions
            .get(&message.message_id)
            .cloned()
            .unwrap_or_default()
    }

    fn require(&self, state: &MockState, required: Permissions) -> Result<(), TransportError> {
        if state.permissions.grants(required) {
            Ok(())
        } else {
            Err(TransportError::PermissionDenied(required))
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn current_user(&self) -> UserId {
        self.bot
    }

    async fn send(
        &self,
        channel: ChannelId,
        content: MessageContent,
    ) -> Result<MessageRef, TransportError> {
        let mut state = self.state.lock().unwrap();
        let message = MessageRef::new(channel, MessageId::new(state.next_message_id));
        state.next_message_id += 1;
        state.contents.insert(message.message_id, content.clone());
        state.calls.push(TransportCall::Send { message, content });
        Ok(message)
    }

    async fn edit(
        &self,
        message: MessageRef,
        content: MessageContent,
    ) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_edits {
            return Err(TransportError::Request("edit rejected".into()));
        }
        if !state.contents.contains_key(&message.message_id) {
            return Err(TransportError::UnknownMessage(message.message_id));
        }
        state.contents.insert(message.message_id, content.clone());
        state.calls.push(TransportCall::Edit { message, content });
        Ok(())
    }

    async fn add_reactions(
        &self,
        message: MessageRef,
        emojis: &[ReactionEmoji],
    ) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        let bot = self.bot;
        state
            .reactions
            .entry(message.message_id)
            .or_default()
            .extend(emojis.iter().map(|emoji| (emoji.clone(), bot)));
        state.calls.push(TransportCall::AddReactions {
            message,
            emojis: emojis.to_vec(),
        });
        Ok(())
    }

    async fn remove_reaction(
        &self,
        message: MessageRef,
        emoji: &ReactionEmoji,
        user: UserId,
    ) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        if user != self.bot {
            self.require(&state, Permissions::MANAGE_MESSAGES)?;
        }
        if let Some(reactions) = state.reactions.get_mut(&message.message_id) {
            reactions.retain(|(e, u)| !(e == emoji && *u == user));
        }
        state.calls.push(TransportCall::RemoveReaction {
            message,
            emoji: emoji.clone(),
            user,
        });
        Ok(())
    }

    async fn remove_all_reactions(&self, message: MessageRef) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        self.require(&state, Permissions::MANAGE_MESSAGES)?;
        state.reactions.remove(&message.message_id);
        state
            .calls
            .push(TransportCall::RemoveAllReactions { message });
        Ok(())
    }

    async fn remove_own_reactions(
        &self,
        message: MessageRef,
        emojis: &[ReactionEmoji],
    ) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        let bot = self.bot;
        if let Some(reactions) = state.reactions.get_mut(&message.message_id) {
            reactions.retain(|(emoji, user)| !(*user == bot && emojis.contains(emoji)));
        }
        state.calls.push(TransportCall::RemoveOwnReactions {
            message,
            emojis: emojis.to_vec(),
        });
        Ok(())
    }

    async fn effective_permissions(
        &self,
        channel: ChannelId,
        user: UserId,
    ) -> Result<Permissions, TransportError> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(TransportCall::EffectivePermissions { channel, user });
        Ok(state.permissions)
    }
}

// ============================================================================
// Event constructors
// ============================================================================

/// A reaction event for `message`.
pub fn reaction(message: MessageRef, user: UserId, emoji: ReactionEmoji) -> GatewayEvent {
    GatewayEvent::ReactionAdded(ReactionAdded {
        message_id: message.message_id,
        channel_id: message.channel_id,
        user_id: user,
        emoji,
    })
}

/// A message event in `channel`.
pub fn message(
    channel: ChannelId,
    message_id: MessageId,
    author: UserId,
    content: impl Into<String>,
) -> GatewayEvent {
    GatewayEvent::MessageReceived(MessageReceived {
        message_id,
        channel_id: channel,
        author_id: author,
        content: content.into(),
    })
}

// ============================================================================
// Bus helpers
// ============================================================================

/// Yield until `bus` has exactly `count` hooks attached.
///
/// Lets a test drive events into a task only once that task's waiter is
/// registered.
pub async fn wait_for_subscribers<E: Message>(bus: &EventBus<E>, count: usize) {
    while bus.len() != count {
        tokio::task::yield_now().await;
    }
}

// ============================================================================
// Recording Hook
// ============================================================================

/// A hook that records all events it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHook::<GatewayEvent>::new();
/// let _sub = bus.attach(recorder.clone());
///
/// bus.dispatch(&event).await;
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHook<E: Clone> {
    events: Arc<Mutex<Vec<E>>>,
    result: HookResult,
}

impl<E: Clone> RecordingHook<E> {
    /// Create a new recording hook that returns `Next`.
    pub fn new() -> Self {
        Self::with_result(HookResult::Next)
    }

    /// Create a recording hook that returns a specific result.
    pub fn with_result(result: HookResult) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().unwrap().clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl<E: Clone> Default for RecordingHook<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for RecordingHook<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            result: self.result,
        }
    }
}

impl<E: Message + Clone> Hook<E> for RecordingHook<E> {
    async fn on_event(&self, event: &E) -> Result<HookResult, BoxError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(self.result)
    }
}
