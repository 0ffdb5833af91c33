//! Test doubles shared by unit and integration tests.
//!
//! Compiled only with the `test-support` feature. Provides a fixed clock and
//! recording queue and index adapters whose failures can be switched on per
//! test. The in-memory hotel directory is re-exported from persistence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use serde_json::Value;

use crate::domain::ports::{QueuePublishError, ReportQueue, SearchIndex, SearchIndexError};

pub use crate::outbound::persistence::InMemoryDirectory;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Queue double recording every published message.
#[derive(Default)]
pub struct RecordingReportQueue {
    published: Mutex<Vec<(String, Value)>>,
    unavailable: AtomicBool,
}

impl RecordingReportQueue {
    /// Create a queue that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent publishes fail as if the broker were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Messages accepted so far as `(queue, message)` pairs.
    pub fn published(&self) -> Vec<(String, Value)> {
        lock(&self.published).clone()
    }
}

#[async_trait]
impl ReportQueue for RecordingReportQueue {
    async fn publish(&self, queue: &str, message: &Value) -> Result<(), QueuePublishError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(QueuePublishError::unavailable("recording queue is offline"));
        }
        lock(&self.published).push((queue.to_owned(), message.clone()));
        Ok(())
    }
}

/// A document accepted by [`RecordingSearchIndex`].
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedDocument {
    pub collection: String,
    pub id: String,
    pub document: Value,
}

/// Index double recording every upserted document.
///
/// Documents are kept in write order; an upsert for an existing
/// `(collection, id)` pair replaces the earlier entry in place.
#[derive(Default)]
pub struct RecordingSearchIndex {
    documents: Mutex<Vec<IndexedDocument>>,
    unavailable: AtomicBool,
}

impl RecordingSearchIndex {
    /// Create an index that accepts every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail as if the index were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Documents accepted so far.
    pub fn documents(&self) -> Vec<IndexedDocument> {
        lock(&self.documents).clone()
    }
}

#[async_trait]
impl SearchIndex for RecordingSearchIndex {
    async fn index(
        &self,
        collection: &str,
        id: &str,
        document: &Value,
    ) -> Result<(), SearchIndexError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(SearchIndexError::unavailable("recording index is offline"));
        }
        let mut documents = lock(&self.documents);
        let entry = IndexedDocument {
            collection: collection.to_owned(),
            id: id.to_owned(),
            document: document.clone(),
        };
        match documents
            .iter_mut()
            .find(|existing| existing.collection == collection && existing.id == id)
        {
            Some(existing) => *existing = entry,
            None => documents.push(entry),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn index_upsert_replaces_existing_document() {
        let index = RecordingSearchIndex::new();
        index
            .index("report_requests", "a", &json!({ "v": 1 }))
            .await
            .expect("first write");
        index
            .index("report_requests", "a", &json!({ "v": 2 }))
            .await
            .expect("second write");

        let documents = index.documents();
        assert_eq!(documents.len(), 1);
        assert_eq!(
            documents.first().map(|doc| doc.document.clone()),
            Some(json!({ "v": 2 }))
        );
    }
}
