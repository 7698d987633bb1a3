use bon::Builder;
use serde::{Deserialize, Serialize};
use std::any::Any;

use super::domain_event_trait::DomainEvent;

/// 聚合变更事件
///
/// 聚合根更新后发布，携带聚合标识与最新版本号。消费方持有旧版本副本时，
/// 可据此回源重新拉取实体；事件本身不携带实体内容。
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEvent {
    context: String,
    name: String,
    aggregate_id: String,
    version: String,
}

impl AggregateEvent {
    /// 聚合标识
    pub fn aggregate_id(&self) -> &str {
        &self.aggregate_id
    }

    /// 聚合当前版本（消费方据此判断本地副本是否过期）
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl DomainEvent for AggregateEvent {
    fn context(&self) -> &str {
        &self.context
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
