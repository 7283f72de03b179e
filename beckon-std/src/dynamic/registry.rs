//! Shared registry of attached hooks.

use super::subscription::{Subscription, SubscriptionId};
use beckon_core::{DynHook, Hook, HookResult, Message};
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
};

struct Entry<E: Message> {
    id: SubscriptionId,
    hook: Arc<dyn DynHook<E>>,
}

/// Hook storage shared by an [`EventBus`] and its subscriptions.
pub(crate) struct Registry<E: Message> {
    next_id: AtomicU64,
    entries: Mutex<Vec<Entry<E>>>,
}

impl<E: Message> Registry<E> {
    fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            entries: Mutex::new(Vec::new()),
        }
    }

    // A panicking hook never runs while the lock is held, so a poisoned
    // list is still consistent.
    fn entries(&self) -> MutexGuard<'_, Vec<Entry<E>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, hook: Arc<dyn DynHook<E>>) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries().push(Entry { id, hook });
        id
    }

    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries();
        match entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, id: SubscriptionId) -> bool {
        self.entries().iter().any(|entry| entry.id == id)
    }

    fn snapshot(&self) -> Vec<(SubscriptionId, Arc<dyn DynHook<E>>)> {
        self.entries()
            .iter()
            .map(|entry| (entry.id, Arc::clone(&entry.hook)))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries().len()
    }
}

/// A live registry of hooks for one event type.
///
/// Cloning the bus is cheap; clones share the same registry. Hooks are
/// delivered every event in registration order and each decides on its own
/// whether the event concerns it.
///
/// # Example
///
/// ```rust,ignore
/// let bus = EventBus::<GatewayEvent>::new();
/// let _logging = bus.attach(LoggingHook::named("gateway"));
///
/// bus.dispatch(&event).await;
/// ```
pub struct EventBus<E: Message> {
    registry: Arc<Registry<E>>,
}

impl<E: Message> EventBus<E> {
    /// Create a bus with no hooks attached.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry::new()),
        }
    }

    /// Attach a hook.
    ///
    /// The hook receives every event dispatched after this call returns. It
    /// stays attached until it reports [`HookResult::Stop`] or the returned
    /// [`Subscription`] is dropped or detached.
    pub fn attach<H: Hook<E>>(&self, hook: H) -> Subscription<E> {
        self.attach_dyn(Arc::new(hook))
    }

    /// Attach an already type-erased hook.
    pub fn attach_dyn(&self, hook: Arc<dyn DynHook<E>>) -> Subscription<E> {
        let id = self.registry.insert(hook);
        tracing::trace!(subscription = %id, "hook attached");
        Subscription::new(id, Arc::downgrade(&self.registry))
    }

    /// Deliver one event to every attached hook.
    ///
    /// Hooks attached while delivery is in progress do not see this event.
    /// Hooks that report [`HookResult::Stop`] are detached before this
    /// returns. A failing hook is logged and stays attached.
    ///
    /// Returns how many hooks were detached.
    pub async fn dispatch(&self, event: &E) -> usize {
        let mut detached = 0;
        for (id, hook) in self.registry.snapshot() {
            match hook.on_event_dyn(event).await {
                Ok(HookResult::Next) => {}
                Ok(HookResult::Stop) => {
                    if self.registry.remove(id) {
                        tracing::trace!(subscription = %id, "hook finished");
                        detached += 1;
                    }
                }
                Err(error) => {
                    tracing::warn!(subscription = %id, %error, "hook failed");
                }
            }
        }
        detached
    }

    /// Number of attached hooks.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no hooks are attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Message> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E: Message> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}
