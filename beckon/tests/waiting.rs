use beckon::{
    ChannelId, Error, GatewayEvent, MessageId, MessageListener, ReactionEmoji, ReactionListener,
    TimeoutError, WaitError,
    testing::{self, RecordingHook},
};
use std::time::Duration;

mod common;
use common::{AUTHOR, CHANNEL, Harness, STRANGER};

#[tokio::test]
async fn test_resolves_with_first_matching_event_in_delivery_order() {
    let h = Harness::new();
    let ctx = h.ctx();
    let wait = ctx.wait_for(
        MessageListener::in_channel(CHANNEL)
            .by(AUTHOR)
            .matching(|m| m.content.starts_with("yes")),
    );

    let events = [
        testing::message(ChannelId::new(7), MessageId::new(1), AUTHOR, "yes"),
        testing::message(CHANNEL, MessageId::new(2), STRANGER, "yes"),
        testing::message(CHANNEL, MessageId::new(3), AUTHOR, "no"),
        testing::message(CHANNEL, MessageId::new(4), AUTHOR, "yes, first"),
        testing::message(CHANNEL, MessageId::new(5), AUTHOR, "yes, second"),
    ];
    for event in &events {
        h.coordinator.dispatch(event).await;
    }

    let message = wait.await.unwrap();
    assert_eq!(message.message_id, MessageId::new(4));
    assert_eq!(message.content, "yes, first");
}

#[tokio::test]
async fn test_resolves_exactly_once() {
    let h = Harness::new();
    let target = h.transport.seed_message(CHANNEL, "pick one".into());
    let wait = h.ctx().wait_for(ReactionListener::on(target.message_id).by(AUTHOR));
    assert_eq!(h.coordinator.bus().len(), 1);

    let first = h.transport.react(target, ReactionEmoji::unicode("a"), AUTHOR);
    let second = h.transport.react(target, ReactionEmoji::unicode("b"), AUTHOR);

    assert_eq!(h.coordinator.dispatch(&first).await, 1);
    assert!(h.coordinator.bus().is_empty());
    assert_eq!(h.coordinator.dispatch(&second).await, 0);

    let reaction = wait.await.unwrap();
    assert_eq!(reaction.emoji, ReactionEmoji::unicode("a"));
}

#[tokio::test]
async fn test_non_matching_events_leave_waiter_attached() {
    let h = Harness::new();
    let target = h.transport.seed_message(CHANNEL, "pick one".into());
    let _wait = h.ctx().wait_for(ReactionListener::on(target.message_id).by(AUTHOR));

    h.click(target, &ReactionEmoji::unicode("a"), STRANGER).await;

    assert_eq!(h.coordinator.bus().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_detaches_waiter() {
    let h = Harness::new();
    let ctx = h.ctx();

    let result = ctx
        .await_reaction(MessageId::new(42), Some(AUTHOR), Some(Duration::from_secs(30)))
        .await;

    let err = result.unwrap_err();
    assert!(err.is_timeout());
    assert!(matches!(
        err,
        Error::Wait(WaitError::Timeout(t)) if t == TimeoutError::new(Duration::from_secs(30))
    ));
    assert!(h.coordinator.bus().is_empty());
}

#[tokio::test]
async fn test_cancelled_wait_detaches() {
    let h = Harness::new();
    let wait = h.ctx().wait_for(MessageListener::in_channel(CHANNEL));
    assert_eq!(h.coordinator.bus().len(), 1);

    drop(wait);

    assert!(h.coordinator.bus().is_empty());
}

#[tokio::test]
async fn test_await_message_from_user() {
    let h = Harness::new();
    let ctx = h.ctx();

    let (received, ()) = tokio::join!(
        ctx.await_message(CHANNEL, Some(AUTHOR), Some(Duration::from_secs(60))),
        async {
            h.waiting().await;
            let stranger = testing::message(CHANNEL, MessageId::new(1), STRANGER, "me!");
            let author = testing::message(CHANNEL, MessageId::new(2), AUTHOR, "Alice");
            h.coordinator.dispatch(&stranger).await;
            h.coordinator.dispatch(&author).await;
        }
    );

    let received = received.unwrap();
    assert_eq!(received.author_id, AUTHOR);
    assert_eq!(received.content, "Alice");
    assert!(h.coordinator.bus().is_empty());
}

#[tokio::test]
async fn test_await_reaction_without_user_accepts_anyone() {
    let h = Harness::new();
    let target = h.transport.seed_message(CHANNEL, "react".into());
    let ctx = h.ctx();

    let (reaction, ()) = tokio::join!(
        ctx.await_reaction(target.message_id, None, None),
        async {
            h.waiting().await;
            h.click(target, &ReactionEmoji::unicode("x"), STRANGER).await;
        }
    );

    assert_eq!(reaction.unwrap().user_id, STRANGER);
}

#[tokio::test]
async fn test_dropped_bus_closes_wait() {
    let h = Harness::new();
    let wait = h.ctx().wait_for(MessageListener::in_channel(CHANNEL));

    drop(h);

    assert_eq!(wait.await.unwrap_err(), WaitError::Closed);
}

#[tokio::test]
async fn test_persistent_hooks_see_events_alongside_waiters() {
    let h = Harness::new();
    let recorder = RecordingHook::<GatewayEvent>::new();
    let _recording = h.coordinator.bus().attach(recorder.clone());
    let wait = h.ctx().wait_for(MessageListener::in_channel(CHANNEL).by(AUTHOR));
    assert_eq!(h.coordinator.bus().len(), 2);

    let events = vec![
        testing::message(CHANNEL, MessageId::new(1), STRANGER, "hi"),
        testing::message(CHANNEL, MessageId::new(2), AUTHOR, "hello"),
        testing::message(CHANNEL, MessageId::new(3), AUTHOR, "again"),
    ];
    let delivered = h.coordinator.run(futures::stream::iter(events.clone())).await;

    assert_eq!(delivered, 3);
    assert_eq!(wait.await.unwrap().message_id, MessageId::new(2));
    assert_eq!(recorder.events(), events);
    assert_eq!(h.coordinator.bus().len(), 1);
}
