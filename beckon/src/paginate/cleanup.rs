//! Removing navigation reactions once a paginator is done.

use beckon_core::{MessageRef, Permissions, ReactionEmoji, Transport, TransportError};

/// How a finished paginator clears its reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupStrategy {
    /// Remove every reaction on the message. Needs `MANAGE_MESSAGES`.
    RemoveAll,
    /// Remove only the navigation reactions the bot added itself.
    RemoveOwn,
}

impl CleanupStrategy {
    /// Pick the strategy the bot is allowed to run.
    pub fn select(permissions: Permissions) -> Self {
        if permissions.grants(Permissions::MANAGE_MESSAGES) {
            CleanupStrategy::RemoveAll
        } else {
            CleanupStrategy::RemoveOwn
        }
    }

    /// Run the strategy against `message`.
    ///
    /// A permission failure (the permission was revoked mid-pagination, say)
    /// is logged and treated as done. Any other transport error is returned.
    #[tracing::instrument(level = "debug", skip(self, transport, emojis), fields(strategy = ?self))]
    pub async fn apply(
        self,
        transport: &dyn Transport,
        message: MessageRef,
        emojis: &[ReactionEmoji],
    ) -> Result<(), TransportError> {
        let result = match self {
            CleanupStrategy::RemoveAll => transport.remove_all_reactions(message).await,
            CleanupStrategy::RemoveOwn => transport.remove_own_reactions(message, emojis).await,
        };

        match result {
            Err(TransportError::PermissionDenied(missing)) => {
                tracing::warn!(?missing, "reaction cleanup not permitted");
                Ok(())
            }
            other => other,
        }
    }
}
