//! 领域事件基础库（events-domain）
//!
//! 提供以领域事件为中心的轻量构件，用于在进程内解耦事件的生产者与消费者：
//! - 领域事件（`domain_event`）：事件契约 `DomainEvent` 与具体类型
//!   `DomainEventBase`、`AggregateEvent`
//! - 事件系统（`eventing`）：按 context 路由的发布/订阅总线与处理器契约
//!
//! 本 crate 仅定义领域层接口与最小必要的错误类型，总线协议与具体传输解耦，
//! 以便后续用消息中间件（例如 RabbitMQ 适配器）替换内存实现而不影响调用方。
//!
//! 典型用法：
//! 1. 定义事件类型并实现 `DomainEvent`（或直接使用 `AggregateEvent`）；
//! 2. 通过 `EventBus::subscribe(context)` 获得该 context 的事件流；
//! 3. 通过 `EventBus::publish` 将事件同步扇出给全部订阅者；
//! 4. 需要消费逻辑时实现 `EventHandler`，由调用方自行与总线组合。
//!
pub mod domain_event;
pub mod error;
#[cfg(feature = "eventing")]
pub mod eventing;
