use serde::{Deserialize, Serialize};
use std::any::Any;

use super::domain_event_trait::DomainEvent;

/// 通用领域事件记录，仅携带路由信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEventBase {
    context: String,
    name: String,
}

impl DomainEventBase {
    pub fn new(context: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            name: name.into(),
        }
    }
}

impl DomainEvent for DomainEventBase {
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
