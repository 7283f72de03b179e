//! Detach handles for attached hooks.

use super::registry::Registry;
use beckon_core::Message;
use std::{fmt, sync::Weak};

/// Identifies one attached hook on a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ownership of one attached hook.
///
/// The hook is detached exactly once: by [`Subscription::detach`], or when the
/// subscription is dropped, whichever comes first. Detaching a hook the bus
/// already removed (because it reported `Stop`) is a no-op.
///
/// The subscription does not keep the bus alive.
#[must_use = "dropping a Subscription detaches its hook immediately"]
pub struct Subscription<E: Message> {
    id: SubscriptionId,
    registry: Weak<Registry<E>>,
    detached: bool,
}

impl<E: Message> Subscription<E> {
    pub(crate) fn new(id: SubscriptionId, registry: Weak<Registry<E>>) -> Self {
        Self {
            id,
            registry,
            detached: false,
        }
    }

    /// The id of the attached hook.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the hook is still registered on a live bus.
    pub fn is_attached(&self) -> bool {
        !self.detached
            && self
                .registry
                .upgrade()
                .is_some_and(|registry| registry.contains(self.id))
    }

    /// Detach the hook. Safe to call more than once.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        if let Some(registry) = self.registry.upgrade()
            && registry.remove(self.id)
        {
            tracing::trace!(subscription = %self.id, "hook detached");
        }
    }
}

impl<E: Message> Drop for Subscription<E> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<E: Message> fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("detached", &self.detached)
            .finish()
    }
}
