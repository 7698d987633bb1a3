use anyhow::Result as AnyResult;
use events_domain::domain_event::{AggregateEvent, DomainEvent, DomainEventBase};
use events_domain::error::DomainError;
use events_domain::eventing::{EventBus, InMemoryEventBus, SharedEvent};
use futures_util::{FutureExt, StreamExt};
use std::sync::Arc;

fn base_event(context: &str, name: &str) -> SharedEvent {
    Arc::new(DomainEventBase::new(context, name))
}

#[tokio::test(flavor = "multi_thread")]
async fn subscriber_receives_only_its_context() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let mut user = bus.subscribe("user").await?;
    let mut message = bus.subscribe("message").await?;

    bus.publish(base_event("message", "MessageCreated")).await?;

    // 扇出在 publish 内同步完成，此刻未入队即不会再出现
    assert!(user.next().now_or_never().flatten().is_none());

    let received = message.next().await.unwrap()?;
    assert_eq!(received.context(), "message");
    assert_eq!(received.name(), "MessageCreated");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn events_arrive_in_publish_order() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let mut sub = bus.subscribe("user").await?;

    for i in 0..5 {
        bus.publish(base_event("user", &format!("Event{i}"))).await?;
    }

    for i in 0..5 {
        let event = sub.next().await.unwrap()?;
        assert_eq!(event.name(), format!("Event{i}"));
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn publish_without_subscribers_is_noop() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    bus.publish(base_event("user", "UserUpdated")).await?;
    assert_eq!(bus.subscriber_count("user"), 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn subscribe_with_empty_context_fails_fast() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let err = match bus.subscribe("").await {
        Ok(_) => panic!("expected subscribe to fail"),
        Err(e) => e,
    };
    assert!(matches!(err, DomainError::InvalidContext { .. }));
    // 校验失败不登记任何订阅通道
    assert_eq!(bus.subscriber_count(""), 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn fanout_delivers_one_copy_to_each_subscriber() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let mut first = bus.subscribe("user").await?;
    let mut second = bus.subscribe("user").await?;

    bus.publish(base_event("user", "UserUpdated")).await?;

    for sub in [&mut first, &mut second] {
        let event = sub.next().await.unwrap()?;
        assert_eq!(event.name(), "UserUpdated");
        // 每个订阅者恰好一份，不做负载均衡
        assert!(sub.next().now_or_never().flatten().is_none());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn aggregate_event_carries_id_and_version() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let mut sub = bus.subscribe("user").await?;

    let event = AggregateEvent::builder()
        .context("user".to_string())
        .name("UserUpdated".to_string())
        .aggregate_id("u1".to_string())
        .version("2".to_string())
        .build();
    bus.publish(Arc::new(event)).await?;

    let received = sub.next().await.unwrap()?;
    assert_eq!(received.context(), "user");
    assert_eq!(received.name(), "UserUpdated");

    let aggregate = received.downcast_ref::<AggregateEvent>().unwrap();
    assert_eq!(aggregate.aggregate_id(), "u1");
    assert_eq!(aggregate.version(), "2");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn late_subscriber_sees_only_later_events() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    bus.publish(base_event("user", "Earlier")).await?;

    let mut sub = bus.subscribe("user").await?;
    bus.publish(base_event("user", "Later")).await?;

    assert_eq!(sub.next().await.unwrap()?.name(), "Later");
    assert!(sub.next().now_or_never().flatten().is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn dropped_subscription_is_pruned_on_publish() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let mut kept = bus.subscribe("user").await?;
    let dropped = bus.subscribe("user").await?;
    drop(dropped);
    assert_eq!(bus.subscriber_count("user"), 2);

    bus.publish(base_event("user", "UserUpdated")).await?;
    assert_eq!(bus.subscriber_count("user"), 1);

    assert_eq!(kept.next().await.unwrap()?.name(), "UserUpdated");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn publish_batch_preserves_order() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let mut sub = bus.subscribe("order").await?;

    bus.publish_batch(vec![
        base_event("order", "OrderCreated"),
        base_event("order", "OrderPaid"),
        base_event("order", "OrderShipped"),
    ])
    .await?;

    for name in ["OrderCreated", "OrderPaid", "OrderShipped"] {
        assert_eq!(sub.next().await.unwrap()?.name(), name);
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn stream_is_consumable_inside_spawned_task() -> AnyResult<()> {
    let bus = InMemoryEventBus::new();
    let mut sub = bus.subscribe("user").await?;

    let consumer = tokio::spawn(async move {
        let mut names = Vec::new();
        while let Some(Ok(event)) = sub.next().await {
            names.push(event.name().to_string());
        }
        names
    });

    bus.publish(base_event("user", "UserCreated")).await?;
    bus.publish(base_event("user", "UserUpdated")).await?;
    // 丢弃总线即关闭全部订阅通道，消费任务随之退出
    drop(bus);

    let names = consumer.await?;
    assert_eq!(names, vec!["UserCreated", "UserUpdated"]);
    Ok(())
}
