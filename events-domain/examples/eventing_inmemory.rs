/// 内存事件总线示例
/// 展示 subscribe -> publish 的按 context 扇出，以及处理器产生后续事件后由调用方重新发布
use anyhow::Result as AnyResult;
use async_trait::async_trait;
use events_domain::domain_event::{AggregateEvent, DomainEvent, DomainEventBase};
use events_domain::eventing::{EventBus, EventHandler, InMemoryEventBus};
use futures_util::StreamExt;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ============================================================================
// 示例处理器（EventHandler）
// ============================================================================

/// 用户变更后刷新读模型，并广播一条投影已刷新的事件
struct ProjectionHandler;

#[async_trait]
impl EventHandler<AggregateEvent> for ProjectionHandler {
    fn handler_name(&self) -> &str {
        "user_projection"
    }

    async fn handle(&self, event: &AggregateEvent) -> AnyResult<Vec<AggregateEvent>> {
        if event.name() != "UserUpdated" {
            return Ok(Vec::new());
        }
        Ok(vec![
            AggregateEvent::builder()
                .context("projection".to_string())
                .name("UserProjectionRefreshed".to_string())
                .aggregate_id(event.aggregate_id().to_string())
                .version(event.version().to_string())
                .build(),
        ])
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> AnyResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("=== 内存事件总线示例 ===\n");
    let bus = InMemoryEventBus::new();

    // 同一 context 可有多个订阅者；这里一个在后台任务消费，一个在当前任务编排处理器
    let mut worker = bus.subscribe("user").await?;
    let mut inline = bus.subscribe("user").await?;
    let mut projection = bus.subscribe("projection").await?;
    let mut message = bus.subscribe("message").await?;
    println!("✅ 已订阅: user x2, projection, message");

    let consumer = tokio::spawn(async move {
        while let Some(Ok(event)) = worker.next().await {
            match event.downcast_ref::<AggregateEvent>() {
                Some(agg) => println!(
                    "user 后台订阅者收到: name={} aggregate_id={} version={}",
                    agg.name(),
                    agg.aggregate_id(),
                    agg.version()
                ),
                None => println!("user 后台订阅者收到: name={}", event.name()),
            }
        }
    });

    // 不同 context 互不可见
    bus.publish(Arc::new(DomainEventBase::new("message", "MessageCreated")))
        .await?;
    bus.publish(Arc::new(
        AggregateEvent::builder()
            .context("user".to_string())
            .name("UserUpdated".to_string())
            .aggregate_id("u1".to_string())
            .version("2".to_string())
            .build(),
    ))
    .await?;

    let received = message.next().await.unwrap()?;
    println!("message 订阅者收到: name={}", received.name());

    // 处理器编排：订阅 -> 还原类型 -> 处理 -> 重新发布后续事件
    let handler = ProjectionHandler;
    let received = inline.next().await.unwrap()?;
    if let Some(event) = received.downcast_ref::<AggregateEvent>() {
        for follow_up in handler.handle(event).await? {
            bus.publish(Arc::new(follow_up)).await?;
        }
    }

    let refreshed = projection.next().await.unwrap()?;
    println!(
        "projection 订阅者收到: name={}（来自处理器 {}）",
        refreshed.name(),
        handler.handler_name()
    );

    // 丢弃总线即关闭全部订阅通道，后台消费者随之退出
    drop(bus);
    consumer.await?;
    println!("\n✅ 总线已关闭，消费者退出");
    Ok(())
}
