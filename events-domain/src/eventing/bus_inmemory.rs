//! 内存版事件总线（InMemoryEventBus）
//!
//! 基于 `tokio::sync::mpsc` 实现的轻量事件总线，满足 `EventBus` 协议：
//! - `publish`：在调用内同步扇出，按注册顺序推送给 context 下的每个订阅通道；
//! - `subscribe`：登记一个无界通道并返回 `'static` 生命周期事件流；
//! - 典型用途：测试环境、示例与本地开发。
//!
//! 注意：向无订阅者的 context 发布将被忽略；订阅流被丢弃后，
//! 对应通道在下一次发布时回收。

use crate::error::{DomainError, DomainResult as Result};
use crate::eventing::bus::{EventBus, EventStream, SharedEvent};
use async_trait::async_trait;
use dashmap::DashMap;
use futures_util::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

type Subscribers = Vec<mpsc::UnboundedSender<SharedEvent>>;

/// 简单的内存事件总线实现
#[derive(Clone, Default)]
pub struct InMemoryEventBus {
    // context -> 按注册顺序排列的订阅通道
    subscribers: Arc<DashMap<String, Subscribers>>,
}

impl InMemoryEventBus {
    /// 创建一个空注册表的内存总线
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定 context 下当前登记的订阅通道数
    pub fn subscriber_count(&self, context: &str) -> usize {
        self.subscribers.get(context).map_or(0, |s| s.len())
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, event: SharedEvent) -> Result<()> {
        let Some(mut subscribers) = self.subscribers.get_mut(event.context()) else {
            tracing::trace!(context = event.context(), "no subscribers, event dropped");
            return Ok(());
        };

        // 推送即入队，不阻塞；发送失败说明订阅流已被丢弃，就地回收该通道
        let before = subscribers.len();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());

        let delivered = subscribers.len();
        if delivered < before {
            tracing::debug!(
                context = event.context(),
                closed = before - delivered,
                "pruned closed subscriptions"
            );
        }
        tracing::debug!(
            context = event.context(),
            name = event.name(),
            subscribers = delivered,
            "event published"
        );
        Ok(())
    }

    async fn subscribe(&self, context: &str) -> Result<EventStream> {
        if context.is_empty() {
            return Err(DomainError::InvalidContext {
                reason: "context name is empty".to_string(),
            });
        }

        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers
            .entry(context.to_string())
            .or_default()
            .push(tx);

        Ok(Box::pin(UnboundedReceiverStream::new(rx).map(Ok)))
    }
}
