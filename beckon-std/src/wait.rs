//! Waiting for the next matching event.
//!
//! [`EventBus::wait_for`] attaches a one-shot hook built from a [`Listener`]
//! and hands back a [`PendingWait`]. The first event the listener accepts
//! resolves the wait; the hook then detaches itself. If the deadline passes
//! first, the hook is detached before the timeout error is returned. If the
//! wait is dropped mid-flight, its [`Subscription`] detaches the hook.

use crate::dynamic::{EventBus, Subscription};
use beckon_core::{BoxError, Hook, HookResult, Listener, Message, TimeoutError, WaitError};
use futures::future::BoxFuture;
use std::{
    future::IntoFuture,
    sync::{Mutex, PoisonError},
    time::Duration,
};
use tokio::sync::oneshot;

/// Hook that forwards the first accepted event to a waiting task.
struct OnceHook<L, T> {
    listener: L,
    sender: Mutex<Option<oneshot::Sender<T>>>,
}

impl<E, L, T> Hook<E> for OnceHook<L, T>
where
    E: Message,
    L: Listener<E, Output = T>,
    T: Message,
{
    async fn on_event(&self, event: &E) -> Result<HookResult, BoxError> {
        let mut slot = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            return Ok(HookResult::Stop);
        }

        let Some(output) = self.listener.listen(event) else {
            return Ok(HookResult::Next);
        };

        if let Some(sender) = slot.take() {
            // The receiver is gone only if the waiter was cancelled.
            let _ = sender.send(output);
        }
        Ok(HookResult::Stop)
    }
}

/// A wait that resolves at most once.
///
/// The hook is already attached when this value exists, so no event
/// dispatched after [`EventBus::wait_for`] returned can be missed. Await it
/// directly, or call [`PendingWait::resolve`].
///
/// # Example
///
/// ```rust,ignore
/// let reaction = bus
///     .wait_for(ReactionListener::on(message_id).by(user_id))
///     .timeout(Duration::from_secs(60))
///     .await?;
/// ```
#[must_use = "a PendingWait does nothing unless awaited"]
pub struct PendingWait<E: Message, T> {
    subscription: Subscription<E>,
    receiver: oneshot::Receiver<T>,
    timeout: Option<Duration>,
}

impl<E: Message, T: Send + 'static> PendingWait<E, T> {
    /// Give up with [`WaitError::Timeout`] after `duration`.
    pub fn timeout(self, duration: Duration) -> Self {
        self.deadline(Some(duration))
    }

    /// Set or clear the deadline. `None` waits until a match or cancellation.
    pub fn deadline(mut self, duration: Option<Duration>) -> Self {
        self.timeout = duration;
        self
    }

    /// Wait for the first accepted event or the deadline, whichever is first.
    pub async fn resolve(self) -> Result<T, WaitError> {
        let Self {
            mut subscription,
            receiver,
            timeout,
        } = self;

        let result = match timeout {
            Some(duration) => match tokio::time::timeout(duration, receiver).await {
                Ok(received) => received.map_err(|_| WaitError::Closed),
                Err(_) => Err(TimeoutError::new(duration).into()),
            },
            None => receiver.await.map_err(|_| WaitError::Closed),
        };

        subscription.detach();
        match &result {
            Ok(_) => tracing::trace!(subscription = %subscription.id(), "wait resolved"),
            Err(error) => tracing::debug!(subscription = %subscription.id(), %error, "wait ended"),
        }
        result
    }
}

impl<E: Message, T: Send + 'static> IntoFuture for PendingWait<E, T> {
    type Output = Result<T, WaitError>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.resolve())
    }
}

impl<E: Message> EventBus<E> {
    /// Start waiting for the first event `listener` accepts.
    ///
    /// The hook is attached before this returns.
    pub fn wait_for<L>(&self, listener: L) -> PendingWait<E, L::Output>
    where
        L: Listener<E>,
    {
        let (sender, receiver) = oneshot::channel();
        let subscription = self.attach(OnceHook {
            listener,
            sender: Mutex::new(Some(sender)),
        });
        PendingWait {
            subscription,
            receiver,
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Above(u32);

    impl Listener<u32> for Above {
        type Output = u32;

        fn listen(&self, event: &u32) -> Option<u32> {
            (*event > self.0).then_some(*event)
        }
    }

    #[tokio::test]
    async fn test_resolves_with_first_accepted_event() {
        let bus = EventBus::new();
        let wait = bus.wait_for(Above(10));

        bus.dispatch(&3).await;
        bus.dispatch(&11).await;
        bus.dispatch(&12).await;

        assert_eq!(wait.await, Ok(11));
        assert!(bus.is_empty());
    }

    #[tokio::test]
    async fn test_ignored_events_keep_hook_attached() {
        let bus = EventBus::new();
        let _wait = bus.wait_for(Above(10));

        assert_eq!(bus.dispatch(&1).await, 0);
        assert_eq!(bus.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_detaches() {
        let bus = EventBus::<u32>::new();
        let wait = bus.wait_for(Above(10)).timeout(Duration::from_secs(5));

        let result = wait.await;

        assert_eq!(
            result,
            Err(WaitError::Timeout(TimeoutError::new(Duration::from_secs(5))))
        );
        assert!(bus.is_empty());
    }

    #[tokio::test]
    async fn test_dropped_wait_detaches() {
        let bus = EventBus::<u32>::new();
        let wait = bus.wait_for(Above(10));
        assert_eq!(bus.len(), 1);

        drop(wait);
        assert!(bus.is_empty());
    }

    #[tokio::test]
    async fn test_closed_bus() {
        let bus = EventBus::<u32>::new();
        let wait = bus.wait_for(Above(10));
        drop(bus);

        assert_eq!(wait.await, Err(WaitError::Closed));
    }
}
