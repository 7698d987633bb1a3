//! 领域层统一错误定义
//!
//! 聚焦事件系统的最小必要集合，便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 订阅参数 ---
    #[error("invalid context: {reason}")]
    InvalidContext { reason: String },

    // --- 事件系统 ---
    #[error("event bus error: {reason}")]
    EventBus { reason: String },
    #[error("event handler error: handler={handler}, reason={reason}")]
    EventHandler { handler: String, reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
