//! 事件总线（EventBus）协议
//!
//! 定义事件发布与订阅的统一抽象，支持批量发布与 'static 生命周期事件流，
//! 以便在异步运行时（如 tokio::spawn）中消费。
//!
use crate::domain_event::DomainEvent;
use crate::error::DomainResult as Result;
use async_trait::async_trait;
use futures_core::stream::BoxStream;
use std::sync::Arc;

/// 总线内部传递的事件句柄，扇出时仅复制引用
pub type SharedEvent = Arc<dyn DomainEvent>;

/// 订阅得到的事件流，按发布顺序逐条产出
pub type EventStream = BoxStream<'static, Result<SharedEvent>>;

/// 事件总线：负责分发事件与订阅事件流
///
/// 分布式实现（如消息中间件适配器）可在同一契约后替换内存实现，
/// 序列化与跨进程投递语义由该实现自行负责。
#[async_trait]
pub trait EventBus: Send + Sync {
    /// 将事件分发给其 context 下的全部订阅者；无订阅者时静默返回
    async fn publish(&self, event: SharedEvent) -> Result<()>;

    /// 按顺序逐条发布一批事件
    async fn publish_batch(&self, events: Vec<SharedEvent>) -> Result<()> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }

    /// 订阅指定 context 的事件流；context 为空时立即返回参数错误
    async fn subscribe(&self, context: &str) -> Result<EventStream>;
}
