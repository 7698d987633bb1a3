use std::any::Any;
use std::fmt;

/// 领域事件需要满足的通用能力边界
///
/// 事件按 `context` 路由（可映射到消息中间件的 channel/topic），
/// 同一 context 内以 `name` 区分事件种类。
pub trait DomainEvent: fmt::Debug + Send + Sync + 'static {
    /// 事件所属上下文（路由分组名，如 `message`、`user`）
    fn context(&self) -> &str;

    /// 事件名称（context 内的事件种类）
    fn name(&self) -> &str;

    /// 以 `Any` 暴露自身，供消费方还原具体事件类型
    fn as_any(&self) -> &dyn Any;
}

impl dyn DomainEvent {
    /// 尝试将事件还原为具体类型
    pub fn downcast_ref<E: DomainEvent>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }
}
