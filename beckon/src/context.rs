//! Per-invocation handle for command code.

use crate::{
    Config, Error,
    paginate::{ActivePaginations, Paginator},
    permissions::effective_permissions,
};
use beckon_core::{
    ChannelId, ChannelKind, EmbedBuilder, GatewayEvent, Listener, MessageContent, MessageId,
    MessageReceived, MessageRef, Permissions, ReactionAdded, Transport, UserId,
};
use beckon_std::{EventBus, MessageListener, PendingWait, ReactionListener};
use std::{fmt, sync::Arc, time::Duration};

/// The channel a command was invoked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel {
    /// Channel id.
    pub id: ChannelId,
    /// Direct conversation or guild channel.
    pub kind: ChannelKind,
}

impl Channel {
    /// A channel inside a guild.
    pub const fn guild(id: ChannelId) -> Self {
        Self {
            id,
            kind: ChannelKind::Guild,
        }
    }

    /// A direct conversation.
    pub const fn direct(id: ChannelId) -> Self {
        Self {
            id,
            kind: ChannelKind::Direct,
        }
    }
}

/// Everything one command invocation needs to talk back to the user.
///
/// Created by [`Coordinator::context`](crate::Coordinator::context). Cheap to
/// clone; clones share the transport, bus and configuration.
#[derive(Clone)]
pub struct CommandContext {
    transport: Arc<dyn Transport>,
    bus: EventBus<GatewayEvent>,
    config: Arc<Config>,
    paginations: ActivePaginations,
    channel: Channel,
    author: UserId,
}

impl CommandContext {
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        bus: EventBus<GatewayEvent>,
        config: Arc<Config>,
        paginations: ActivePaginations,
        channel: Channel,
        author: UserId,
    ) -> Self {
        Self {
            transport,
            bus,
            config,
            paginations,
            channel,
            author,
        }
    }

    /// Channel the command was invoked in.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// User who invoked the command.
    pub fn author(&self) -> UserId {
        self.author
    }

    /// Outbound transport.
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Event bus the coordinator dispatches into.
    pub fn bus(&self) -> &EventBus<GatewayEvent> {
        &self.bus
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn paginations(&self) -> &ActivePaginations {
        &self.paginations
    }

    /// Post a message in the invoking channel.
    pub async fn send(&self, content: impl Into<MessageContent>) -> Result<MessageRef, Error> {
        Ok(self.transport.send(self.channel.id, content.into()).await?)
    }

    /// Start waiting for the first gateway event `listener` accepts.
    ///
    /// The listener is attached before this returns.
    pub fn wait_for<L>(&self, listener: L) -> PendingWait<GatewayEvent, L::Output>
    where
        L: Listener<GatewayEvent>,
    {
        self.bus.wait_for(listener)
    }

    /// Wait for a reaction on `message`, optionally only from `user`.
    ///
    /// `None` waits without a deadline. Add a predicate by building a
    /// [`ReactionListener`] and calling [`wait_for`](Self::wait_for).
    pub async fn await_reaction(
        &self,
        message: MessageId,
        user: Option<UserId>,
        timeout: Option<Duration>,
    ) -> Result<ReactionAdded, Error> {
        let mut listener = ReactionListener::on(message);
        if let Some(user) = user {
            listener = listener.by(user);
        }
        Ok(self.wait_for(listener).deadline(timeout).await?)
    }

    /// Wait for a message posted in `channel`, optionally only by `user`.
    pub async fn await_message(
        &self,
        channel: ChannelId,
        user: Option<UserId>,
        timeout: Option<Duration>,
    ) -> Result<MessageReceived, Error> {
        let mut listener = MessageListener::in_channel(channel);
        if let Some(user) = user {
            listener = listener.by(user);
        }
        Ok(self.wait_for(listener).deadline(timeout).await?)
    }

    /// The bot's permissions in the invoking channel, fetched fresh.
    pub async fn permissions(&self) -> Result<Permissions, Error> {
        Ok(effective_permissions(self.transport(), self.channel).await?)
    }

    /// Whether the bot holds every permission in `required`.
    pub async fn has_permission(&self, required: Permissions) -> Result<bool, Error> {
        Ok(self.permissions().await?.grants(required))
    }

    /// Page through `items` with navigation reactions until the invoking user
    /// stops or goes quiet.
    ///
    /// `render` fills in the embed for the items of one page; the title is
    /// already set. See [`Paginator`] for the options this shortcut leaves at
    /// their defaults.
    pub async fn paginate<T, R>(
        &self,
        items: &[T],
        per_page: usize,
        title: impl Into<String>,
        render: R,
    ) -> Result<(), Error>
    where
        T: Sync,
        R: Fn(&mut EmbedBuilder, &[T]) + Send + Sync,
    {
        Paginator::new(self, items, per_page, title, render)
            .run()
            .await
    }
}

impl fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContext")
            .field("channel", &self.channel)
            .field("author", &self.author)
            .finish_non_exhaustive()
    }
}
