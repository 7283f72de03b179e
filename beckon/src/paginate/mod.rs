//! Reaction-driven pagination.
//!
//! A [`Paginator`] owns one message for as long as it runs:
//!
//! 1. render page 0 and send it (or edit an existing message into it)
//! 2. add the five navigation reactions: first, previous, next, last, stop
//! 3. wait for the invoking user to click one of them
//! 4. remove that user's reaction if the bot may, then edit in the new page
//! 5. on stop, or when nobody clicks for the inactivity timeout, clear the
//!    navigation reactions and return
//!
//! Running out of time is the normal way for a pagination to end and is not
//! reported as an error.

mod cleanup;
mod lock;
mod state;

pub use cleanup::CleanupStrategy;
pub use lock::{ActivePaginations, PaginationClaim};
pub use state::{NavigationAction, NavigationEmojis, PaginationState, Transition};

use crate::{CommandContext, Error};
use beckon_core::{
    Embed, EmbedBuilder, GatewayEvent, Listener, MessageRef, Permissions, ReactionAdded,
    ReactionEmoji, UserId, WaitError,
};
use beckon_std::{PendingWait, ReactionListener};
use std::time::Duration;

/// Where the pagination loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingInput,
    Updating,
    Cleanup,
    Done,
}

/// Pages through a slice of items on one message.
///
/// # Example
///
/// ```rust,ignore
/// Paginator::new(&ctx, &members, 25, "Members of your system", |embed, page| {
///     for member in page {
///         embed.field(&member.name, &member.pronouns, true);
///     }
/// })
/// .timeout(Duration::from_secs(120))
/// .run()
/// .await?;
/// ```
pub struct Paginator<'a, T, R> {
    ctx: &'a CommandContext,
    items: &'a [T],
    title: String,
    render: R,
    state: PaginationState,
    user: UserId,
    timeout: Duration,
    emojis: NavigationEmojis,
}

impl<'a, T, R> Paginator<'a, T, R>
where
    T: Sync,
    R: Fn(&mut EmbedBuilder, &[T]) + Send + Sync,
{
    /// Paginate `items`, `per_page` at a time, for the context's author.
    ///
    /// Timeout and emoji come from the context's configuration.
    pub fn new(
        ctx: &'a CommandContext,
        items: &'a [T],
        per_page: usize,
        title: impl Into<String>,
        render: R,
    ) -> Self {
        Self {
            ctx,
            items,
            title: title.into(),
            render,
            state: PaginationState::new(items.len(), per_page),
            user: ctx.author(),
            timeout: ctx.config().pagination_timeout(),
            emojis: ctx.config().navigation(),
        }
    }

    /// Accept navigation from `user` instead of the author.
    pub fn user(mut self, user: UserId) -> Self {
        self.user = user;
        self
    }

    /// Stop after `timeout` without navigation input.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a different set of navigation emoji.
    pub fn emojis(mut self, emojis: NavigationEmojis) -> Self {
        self.emojis = emojis;
        self
    }

    /// Send page 0 as a new message in the context's channel and paginate it.
    pub async fn run(self) -> Result<(), Error> {
        let message = self
            .ctx
            .transport()
            .send(self.ctx.channel().id, self.render_page().into())
            .await?;
        let claim = self
            .ctx
            .paginations()
            .claim(message.message_id)
            .ok_or(Error::AlreadyPaginating(message.message_id))?;
        self.drive(message, claim).await
    }

    /// Paginate an existing message, replacing its content with page 0.
    ///
    /// Fails with [`Error::AlreadyPaginating`] if another paginator is
    /// running on `message`.
    pub async fn run_on(self, message: MessageRef) -> Result<(), Error> {
        let claim = self
            .ctx
            .paginations()
            .claim(message.message_id)
            .ok_or(Error::AlreadyPaginating(message.message_id))?;
        self.ctx
            .transport()
            .edit(message, self.render_page().into())
            .await?;
        self.drive(message, claim).await
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(message = %message.message_id, user = %self.user, pages = self.state.page_count())
    )]
    async fn drive(mut self, message: MessageRef, _claim: PaginationClaim) -> Result<(), Error> {
        let emojis = self.emojis.all();

        // A navigation waiter is attached before every add_reactions and edit.
        let mut pending = Some(self.listen(message));
        self.ctx.transport().add_reactions(message, &emojis).await?;

        let mut phase = Phase::AwaitingInput;
        while phase != Phase::Done {
            phase = match phase {
                Phase::AwaitingInput => {
                    let wait = pending.take().unwrap_or_else(|| self.listen(message));
                    match self.next_input(wait).await? {
                        Some((reaction, action)) => match self.state.apply(action) {
                            Transition::Stop => Phase::Cleanup,
                            Transition::Render(page) => {
                                tracing::trace!(?action, page, "navigating");
                                pending = Some(self.listen(message));
                                self.remove_user_reaction(message, &reaction).await;
                                Phase::Updating
                            }
                        },
                        None => Phase::Cleanup,
                    }
                }
                Phase::Updating => {
                    self.ctx
                        .transport()
                        .edit(message, self.render_page().into())
                        .await?;
                    Phase::AwaitingInput
                }
                Phase::Cleanup => {
                    self.cleanup(message, &emojis).await?;
                    Phase::Done
                }
                Phase::Done => Phase::Done,
            };
        }

        tracing::debug!(page = self.state.page(), "pagination finished");
        Ok(())
    }

    /// Attach a waiter for the user's next navigation click on `message`.
    fn listen(&self, message: MessageRef) -> PendingWait<GatewayEvent, ReactionAdded> {
        let emojis = self.emojis.clone();
        let listener = ReactionListener::on(message.message_id)
            .by(self.user)
            .filter(move |reaction| emojis.action_for(&reaction.emoji).is_some());
        self.ctx.wait_for(listener).timeout(self.timeout)
    }

    /// The next navigation click, or `None` once the user has gone quiet.
    async fn next_input(
        &self,
        wait: PendingWait<GatewayEvent, ReactionAdded>,
    ) -> Result<Option<(ReactionAdded, NavigationAction)>, Error> {
        match wait.await {
            Ok(reaction) => Ok(self
                .emojis
                .action_for(&reaction.emoji)
                .map(|action| (reaction, action))),
            Err(WaitError::Timeout(_)) => {
                tracing::debug!(timeout = ?self.timeout, "no navigation input, stopping");
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Take the user's click back off so the same button can be pressed
    /// again. Only attempted with `MANAGE_MESSAGES`; never fails the loop.
    async fn remove_user_reaction(&self, message: MessageRef, reaction: &ReactionAdded) {
        if !self.may_manage_messages().await {
            return;
        }
        if let Err(error) = self
            .ctx
            .transport()
            .remove_reaction(message, &reaction.emoji, reaction.user_id)
            .await
        {
            tracing::debug!(%error, emoji = %reaction.emoji, "could not remove navigation reaction");
        }
    }

    async fn cleanup(
        &self,
        message: MessageRef,
        emojis: &[ReactionEmoji],
    ) -> Result<(), Error> {
        let permissions = match self.ctx.permissions().await {
            Ok(permissions) => permissions,
            Err(error) => {
                tracing::debug!(%error, "permission check failed, removing own reactions only");
                Permissions::empty()
            }
        };
        CleanupStrategy::select(permissions)
            .apply(self.ctx.transport(), message, emojis)
            .await?;
        Ok(())
    }

    async fn may_manage_messages(&self) -> bool {
        match self.ctx.has_permission(Permissions::MANAGE_MESSAGES).await {
            Ok(granted) => granted,
            Err(error) => {
                tracing::debug!(%error, "permission check failed");
                false
            }
        }
    }

    fn render_page(&self) -> Embed {
        let mut builder = EmbedBuilder::new();
        builder.title(self.state.title(&self.title));
        (self.render)(&mut builder, &self.items[self.state.range()]);
        builder.build()
    }
}
