use beckon_core::MessageId;
use std::{
    collections::HashSet,
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

/// Messages that currently have a paginator attached.
///
/// At most one paginator drives a given message. A paginator claims its
/// message before touching it and the claim is released when the returned
/// [`PaginationClaim`] drops, on every exit path.
#[derive(Clone, Default)]
pub struct ActivePaginations {
    messages: Arc<Mutex<HashSet<MessageId>>>,
}

impl ActivePaginations {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `message`, or `None` if another paginator holds it.
    pub fn claim(&self, message: MessageId) -> Option<PaginationClaim> {
        let inserted = self
            .messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(message);
        inserted.then(|| PaginationClaim {
            message,
            active: self.clone(),
        })
    }

    /// Whether `message` is being paginated.
    pub fn contains(&self, message: MessageId) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&message)
    }

    /// Number of running paginators.
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no paginator is running.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn release(&self, message: MessageId) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&message);
    }
}

impl fmt::Debug for ActivePaginations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivePaginations")
            .field("len", &self.len())
            .finish()
    }
}

/// Exclusive hold on one message. Released on drop.
#[must_use = "the claim is released as soon as it is dropped"]
pub struct PaginationClaim {
    message: MessageId,
    active: ActivePaginations,
}

impl PaginationClaim {
    /// The claimed message.
    pub fn message(&self) -> MessageId {
        self.message
    }
}

impl Drop for PaginationClaim {
    fn drop(&mut self) {
        self.active.release(self.message);
    }
}

impl fmt::Debug for PaginationClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationClaim")
            .field("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_claim_fails() {
        let active = ActivePaginations::new();
        let message = MessageId::new(1);

        let claim = active.claim(message).unwrap();
        assert!(active.claim(message).is_none());
        assert!(active.claim(MessageId::new(2)).is_some());

        drop(claim);
        assert!(!active.contains(message));
        assert!(active.claim(message).is_some());
    }

    #[test]
    fn test_clones_share_state() {
        let active = ActivePaginations::new();
        let other = active.clone();

        let _claim = active.claim(MessageId::new(1)).unwrap();
        assert!(other.contains(MessageId::new(1)));
        assert_eq!(other.len(), 1);
    }
}
