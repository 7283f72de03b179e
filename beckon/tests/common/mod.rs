#![allow(dead_code)]

use beckon::{
    Channel, ChannelId, CommandContext, Config, Coordinator, EmbedBuilder, MessageRef,
    NavigationEmojis, Permissions, ReactionEmoji, UserId,
    testing::{self, MockTransport},
};
use std::sync::Arc;

// ============================================================================
// Fixtures
// ============================================================================

pub const BOT: UserId = UserId::new(1);
pub const AUTHOR: UserId = UserId::new(2);
pub const STRANGER: UserId = UserId::new(3);
pub const CHANNEL: ChannelId = ChannelId::new(100);

/// A coordinator wired to an in-memory transport.
pub struct Harness {
    pub transport: MockTransport,
    pub coordinator: Coordinator,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let transport = MockTransport::new(BOT);
        let coordinator = Coordinator::new(Arc::new(transport.clone()), config);
        Self {
            transport,
            coordinator,
        }
    }

    pub fn permissions(self, permissions: Permissions) -> Self {
        self.transport.set_permissions(permissions);
        self
    }

    /// Context for `AUTHOR` in the guild channel.
    pub fn ctx(&self) -> CommandContext {
        self.coordinator.context(Channel::guild(CHANNEL), AUTHOR)
    }

    /// Context for `AUTHOR` in a direct conversation.
    pub fn direct_ctx(&self) -> CommandContext {
        self.coordinator.context(Channel::direct(CHANNEL), AUTHOR)
    }

    /// Yield until exactly one waiter is attached.
    pub async fn waiting(&self) {
        testing::wait_for_subscribers(self.coordinator.bus(), 1).await;
    }

    /// `user` clicks `emoji` on `message`.
    pub async fn click(&self, message: MessageRef, emoji: &ReactionEmoji, user: UserId) {
        let event = self.transport.react(message, emoji.clone(), user);
        self.coordinator.dispatch(&event).await;
    }

    /// Wait for the paginator's waiter, then click as `AUTHOR`.
    pub async fn navigate(&self, message: MessageRef, emoji: &ReactionEmoji) {
        self.waiting().await;
        self.click(message, emoji, AUTHOR).await;
    }

    /// The first message the bot sent.
    pub fn first_sent(&self) -> MessageRef {
        self.transport.sent()[0]
    }

    /// Embed title currently shown on `message`.
    pub fn title(&self, message: MessageRef) -> String {
        self.transport
            .content(message)
            .and_then(|content| content.embed)
            .and_then(|embed| embed.title)
            .unwrap_or_default()
    }

    /// Embed description currently shown on `message`.
    pub fn description(&self, message: MessageRef) -> String {
        self.transport
            .content(message)
            .and_then(|content| content.embed)
            .and_then(|embed| embed.description)
            .unwrap_or_default()
    }

    /// Reactions the bot itself still has on `message`.
    pub fn bot_reactions(&self, message: MessageRef) -> Vec<ReactionEmoji> {
        self.transport
            .reactions(message)
            .into_iter()
            .filter(|(_, user)| *user == BOT)
            .map(|(emoji, _)| emoji)
            .collect()
    }
}

// ============================================================================
// Pagination helpers
// ============================================================================

pub fn nav() -> NavigationEmojis {
    NavigationEmojis::default()
}

pub fn numbers(count: u32) -> Vec<u32> {
    (1..=count).collect()
}

/// Lists the page's items, comma separated.
pub fn render(embed: &mut EmbedBuilder, page: &[u32]) {
    let listed: Vec<String> = page.iter().map(ToString::to_string).collect();
    embed.description(listed.join(","));
}
