//! Driven port for handing report jobs to the message broker.
use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by queue publisher adapters.
    pub enum QueuePublishError {
        /// Broker infrastructure is unavailable.
        Unavailable { message: String } => "report queue is unavailable: {message}",
        /// The broker refused or did not confirm the message.
        Rejected { message: String } => "report message was rejected: {message}",
    }
}

/// Publishes serialised messages to a named queue.
///
/// A successful return means the broker accepted the message locally;
/// delivery to a consumer is not observed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportQueue: Send + Sync {
    /// Publish `message` as JSON onto `queue`.
    async fn publish(&self, queue: &str, message: &Value) -> Result<(), QueuePublishError>;
}
