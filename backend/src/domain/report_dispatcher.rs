//! Report request dispatch.
//!
//! A dispatch assigns identity to a request, publishes it to the report queue
//! and then upserts it into the search index. The queue is authoritative: a
//! queue failure aborts before anything is indexed, while an index failure
//! after a successful publish is reported but never retracts the queued job.
//!
//! ```text
//! draft -> ReportRequest::pending -> ReportQueue::publish -> SearchIndex::index
//!                                          |                       |
//!                                   Queue error (stop)     Index error (job stays queued)
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::ports::{
    QueuePublishError, ReportQueue, ReportRequestCommand, SearchIndex, SearchIndexError,
};
use crate::domain::{
    Error, REPORT_REQUESTS_COLLECTION, REPORT_REQUESTS_QUEUE, ReportRequest, ReportRequestDraft,
};

/// Ways a dispatch can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportDispatchError {
    /// The request could not be serialised; nothing was published.
    #[error("report request {request_id} could not be encoded: {message}")]
    Encode { request_id: Uuid, message: String },
    /// Publishing failed; nothing was queued or indexed.
    #[error("report request {request_id} could not be queued: {source}")]
    Queue {
        request_id: Uuid,
        #[source]
        source: QueuePublishError,
    },
    /// The job was queued but the index write failed. The job may still run.
    #[error("report request {} was queued but not indexed: {source}", .request.id)]
    Index {
        request: ReportRequest,
        #[source]
        source: SearchIndexError,
    },
}

impl ReportDispatchError {
    /// Whether the job reached the queue before the failure.
    #[must_use]
    pub fn was_queued(&self) -> bool {
        matches!(self, Self::Index { .. })
    }
}

impl From<ReportDispatchError> for Error {
    fn from(value: ReportDispatchError) -> Self {
        match value {
            ReportDispatchError::Encode { message, .. } => {
                Self::internal(format!("failed to encode report request: {message}"))
            }
            ReportDispatchError::Queue { .. } => Self::service_unavailable(
                "failed to request report",
            )
            .with_details(json!({ "stage": "queue", "queued": false })),
            ReportDispatchError::Index { request, .. } => {
                Self::service_unavailable("failed to index report request").with_details(json!({
                    "stage": "index",
                    "queued": true,
                    "requestId": request.id,
                }))
            }
        }
    }
}

/// Orchestrates the queue-then-index write for report requests.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use hotel_service::domain::{ReportDispatcher, ReportRequestDraft};
/// use hotel_service::outbound::queue::StubReportQueue;
/// use hotel_service::outbound::search::StubSearchIndex;
///
/// # async fn example() {
/// let dispatcher = ReportDispatcher::new(Arc::new(StubReportQueue), Arc::new(StubSearchIndex));
/// let request = dispatcher
///     .dispatch(ReportRequestDraft { location: Some("Paris".into()) })
///     .await
///     .expect("stubs accept everything");
/// assert_eq!(request.location.as_deref(), Some("Paris"));
/// # }
/// ```
pub struct ReportDispatcher<Q: ?Sized, I: ?Sized> {
    queue: Arc<Q>,
    index: Arc<I>,
}

impl<Q: ?Sized, I: ?Sized> Clone for ReportDispatcher<Q, I> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
            index: Arc::clone(&self.index),
        }
    }
}

impl<Q, I> ReportDispatcher<Q, I>
where
    Q: ReportQueue + ?Sized,
    I: SearchIndex + ?Sized,
{
    /// Create a dispatcher over a queue publisher and a search index.
    pub fn new(queue: Arc<Q>, index: Arc<I>) -> Self {
        Self { queue, index }
    }

    /// Assign identity to `draft`, publish it, then index it.
    ///
    /// Not idempotent: every call produces a new identifier and new writes.
    ///
    /// # Errors
    /// See [`ReportDispatchError`] for which side effects each variant implies.
    pub async fn dispatch(
        &self,
        draft: ReportRequestDraft,
    ) -> Result<ReportRequest, ReportDispatchError> {
        let request = ReportRequest::pending(draft);
        let document =
            serde_json::to_value(&request).map_err(|err| ReportDispatchError::Encode {
                request_id: request.id,
                message: err.to_string(),
            })?;

        if let Err(source) = self.queue.publish(REPORT_REQUESTS_QUEUE, &document).await {
            error!(request_id = %request.id, error = %source, "report request not queued");
            return Err(ReportDispatchError::Queue {
                request_id: request.id,
                source,
            });
        }

        let id = request.id.to_string();
        if let Err(source) = self
            .index
            .index(REPORT_REQUESTS_COLLECTION, &id, &document)
            .await
        {
            warn!(
                request_id = %request.id,
                error = %source,
                "report request queued but not indexed"
            );
            return Err(ReportDispatchError::Index { request, source });
        }

        info!(request_id = %request.id, "report request dispatched");
        Ok(request)
    }
}

#[async_trait]
impl<Q, I> ReportRequestCommand for ReportDispatcher<Q, I>
where
    Q: ReportQueue + ?Sized,
    I: SearchIndex + ?Sized,
{
    async fn request_report(&self, draft: ReportRequestDraft) -> Result<ReportRequest, Error> {
        self.dispatch(draft).await.map_err(Error::from)
    }
}

#[cfg(test)]
#[path = "report_dispatcher_tests.rs"]
mod tests;
