//! Yes/no confirmation through reactions.

use crate::{CommandContext, Error};
use beckon_core::{Listener, MessageRef, UserId};
use beckon_std::ReactionListener;
use std::time::Duration;

impl CommandContext {
    /// Ask `user` to confirm by reacting to `message`.
    ///
    /// Adds the accept and reject reactions, in that order, then waits for
    /// `user` to pick one. Reactions from anyone else, or with any other
    /// emoji, are ignored. Returns `true` for accept and `false` for reject.
    ///
    /// `timeout` defaults to [`Config::confirm_timeout`](crate::Config::confirm_timeout).
    /// Running out of time is an error ([`Error::is_timeout`]), not a "no".
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let prompt = ctx.send("Really delete your system?").await?;
    /// if !ctx.confirm(prompt, ctx.author(), None).await? {
    ///     ctx.send("Cancelled.").await?;
    /// }
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn confirm(
        &self,
        message: MessageRef,
        user: UserId,
        timeout: Option<Duration>,
    ) -> Result<bool, Error> {
        let accept = self.config().accept_emoji();
        let emojis = [accept.clone(), self.config().reject_emoji()];
        let timeout = timeout.unwrap_or_else(|| self.config().confirm_timeout());

        // Attach before reacting so an early click is not missed.
        let wait = self
            .wait_for(
                ReactionListener::on(message.message_id)
                    .by(user)
                    .one_of(emojis.clone())
                    .map(move |reaction| reaction.emoji == accept),
            )
            .timeout(timeout);

        self.transport().add_reactions(message, &emojis).await?;

        let accepted = wait.await?;
        tracing::debug!(accepted, "confirmation answered");
        Ok(accepted)
    }
}
