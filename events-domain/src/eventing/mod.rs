//! 事件子系统（eventing）
//!
//! 提供事件发布/订阅的基础抽象与内存实现：
//! - `EventBus`：统一发布/订阅接口，按 context 路由；
//! - `InMemoryEventBus`：进程内总线，发布时同步扇出到全部订阅者；
//! - `EventHandler`：消费事件并产生后续事件的扩展点，由调用方与总线组合。
//!
//! 该模块仅定义协议与内存实现，不绑定具体传输，可对接任意消息系统。
//!
pub mod bus;
pub mod bus_inmemory;
pub mod handler;

pub use bus::{EventBus, EventStream, SharedEvent};
pub use bus_inmemory::InMemoryEventBus;
pub use handler::EventHandler;
