//! 事件处理器（EventHandler）
//!
//! 定义消费某一事件类型并产生后续事件的处理契约。总线不会自动调用处理器，
//! 订阅、处理与将后续事件重新发布的编排由调用方完成。
//!
use crate::domain_event::DomainEvent;
use async_trait::async_trait;

/// 事件处理器：处理某一类型的事件，返回零个或多个后续事件
#[async_trait]
pub trait EventHandler<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 处理器名称（用于失败标记与审计）
    fn handler_name(&self) -> &str;

    /// 处理事件，返回需要继续发布的后续事件
    async fn handle(&self, event: &E) -> anyhow::Result<Vec<E>>;
}
