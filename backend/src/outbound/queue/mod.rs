//! Report queue adapters.
//!
//! [`AmqpReportQueue`] publishes to RabbitMQ. [`StubReportQueue`] discards
//! every message and is only wired in when stub adapters are explicitly
//! allowed. [`UnconfiguredReportQueue`] fails every publish.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::domain::ports::{QueuePublishError, ReportQueue};

mod amqp;

pub use amqp::{AmqpConfig, AmqpReportQueue};

/// Queue implementation that accepts and discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubReportQueue;

#[async_trait]
impl ReportQueue for StubReportQueue {
    async fn publish(&self, queue: &str, message: &Value) -> Result<(), QueuePublishError> {
        let id = message
            .get("id")
            .and_then(|value| value.as_str())
            .unwrap_or_default();
        warn!(
            queue,
            id, "StubReportQueue: message discarded (no broker configured)"
        );
        Ok(())
    }
}

/// Queue implementation reporting that no broker was configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredReportQueue;

#[async_trait]
impl ReportQueue for UnconfiguredReportQueue {
    async fn publish(&self, queue: &str, _message: &Value) -> Result<(), QueuePublishError> {
        Err(QueuePublishError::unavailable(format!(
            "no broker configured for {queue}"
        )))
    }
}
