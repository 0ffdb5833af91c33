//! Search index adapters.
//!
//! [`ElasticsearchIndex`] writes through the Elasticsearch document API.
//! [`StubSearchIndex`] discards documents and is only wired in when stub
//! adapters are explicitly allowed. [`UnconfiguredSearchIndex`] fails every
//! write.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::domain::ports::{SearchIndex, SearchIndexError};

mod elasticsearch;

pub use elasticsearch::ElasticsearchIndex;

/// Index implementation that accepts and discards every document.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubSearchIndex;

#[async_trait]
impl SearchIndex for StubSearchIndex {
    async fn index(
        &self,
        collection: &str,
        id: &str,
        _document: &Value,
    ) -> Result<(), SearchIndexError> {
        warn!(
            collection,
            id, "StubSearchIndex: document discarded (no search index configured)"
        );
        Ok(())
    }
}

/// Index implementation reporting that no search index was configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredSearchIndex;

#[async_trait]
impl SearchIndex for UnconfiguredSearchIndex {
    async fn index(
        &self,
        collection: &str,
        _id: &str,
        _document: &Value,
    ) -> Result<(), SearchIndexError> {
        Err(SearchIndexError::unavailable(format!(
            "no search index configured for {collection}"
        )))
    }
}
