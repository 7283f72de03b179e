//! The root object wiring a transport to an event bus.

use crate::{ActivePaginations, Channel, CommandContext, Config};
use beckon_core::{GatewayEvent, Transport, UserId};
use beckon_std::{EventBus, LoggingHook, Subscription};
use futures::{Stream, StreamExt};
use std::{fmt, pin::pin, sync::Arc};

/// Owns the transport, the event bus, the configuration and the set of
/// running paginators.
///
/// The connection layer feeds inbound events in through
/// [`dispatch`](Self::dispatch) or [`run`](Self::run); command code gets a
/// [`CommandContext`] from [`context`](Self::context). Clones share
/// everything.
///
/// # Example
///
/// ```rust,ignore
/// let coordinator = Coordinator::new(Arc::new(transport), Config::load("beckon.toml")?)
///     .with_event_logging();
///
/// let pump = coordinator.clone();
/// tokio::spawn(async move { pump.run(gateway).await });
/// ```
#[derive(Clone)]
pub struct Coordinator {
    transport: Arc<dyn Transport>,
    bus: EventBus<GatewayEvent>,
    config: Arc<Config>,
    paginations: ActivePaginations,
    logging: Option<Arc<Subscription<GatewayEvent>>>,
}

impl Coordinator {
    /// Create a coordinator with an empty bus.
    pub fn new(transport: Arc<dyn Transport>, config: Config) -> Self {
        Self {
            transport,
            bus: EventBus::new(),
            config: Arc::new(config),
            paginations: ActivePaginations::new(),
            logging: None,
        }
    }

    /// Log every inbound event at debug level.
    pub fn with_event_logging(mut self) -> Self {
        let subscription = self.bus.attach(LoggingHook::named("gateway"));
        self.logging = Some(Arc::new(subscription));
        self
    }

    /// The event bus.
    pub fn bus(&self) -> &EventBus<GatewayEvent> {
        &self.bus
    }

    /// The outbound transport.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Messages with a running paginator.
    pub fn paginations(&self) -> &ActivePaginations {
        &self.paginations
    }

    /// Deliver one inbound event to every attached hook.
    ///
    /// Returns the number of hooks that finished and were detached.
    #[tracing::instrument(level = "trace", skip_all)]
    pub async fn dispatch(&self, event: &GatewayEvent) -> usize {
        self.bus.dispatch(event).await
    }

    /// Dispatch every event from `events`, in order, until the stream ends.
    ///
    /// Returns the number of events delivered.
    pub async fn run<S>(&self, events: S) -> usize
    where
        S: Stream<Item = GatewayEvent>,
    {
        let mut events = pin!(events);
        let mut delivered = 0;
        while let Some(event) = events.next().await {
            self.dispatch(&event).await;
            delivered += 1;
        }
        tracing::info!(delivered, "event stream ended");
        delivered
    }

    /// A handle for one command invocation by `author` in `channel`.
    pub fn context(&self, channel: Channel, author: UserId) -> CommandContext {
        CommandContext::new(
            self.transport.clone(),
            self.bus.clone(),
            self.config.clone(),
            self.paginations.clone(),
            channel,
            author,
        )
    }
}

impl fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("hooks", &self.bus.len())
            .field("paginations", &self.paginations)
            .field("event_logging", &self.logging.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beckon_core::{ChannelId, MessageId};
    use beckon_std::{
        MessageListener,
        testing::{self, MockTransport},
    };

    const BOT: UserId = UserId::new(1);

    #[tokio::test]
    async fn test_event_logging_keeps_one_hook() {
        let coordinator =
            Coordinator::new(Arc::new(MockTransport::new(BOT)), Config::default())
                .with_event_logging();
        assert_eq!(coordinator.bus().len(), 1);

        let event = testing::message(ChannelId::new(1), MessageId::new(10), UserId::new(2), "hi");
        assert_eq!(coordinator.dispatch(&event).await, 0);
        assert_eq!(coordinator.bus().len(), 1);
    }

    #[tokio::test]
    async fn test_run_counts_events() {
        let coordinator = Coordinator::new(Arc::new(MockTransport::new(BOT)), Config::default());
        let events =
            (0..3).map(|i| testing::message(ChannelId::new(1), MessageId::new(i), UserId::new(2), "hi"));

        assert_eq!(coordinator.run(futures::stream::iter(events)).await, 3);
    }

    #[test]
    fn test_contexts_share_the_bus() {
        let coordinator = Coordinator::new(Arc::new(MockTransport::new(BOT)), Config::default());
        let ctx = coordinator.context(Channel::guild(ChannelId::new(1)), UserId::new(2));

        let _wait = ctx.wait_for(MessageListener::in_channel(ChannelId::new(1)));
        assert_eq!(coordinator.bus().len(), 1);
    }
}
