//! Driven port for the search index.
use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by search index adapters.
    pub enum SearchIndexError {
        /// Index infrastructure is unreachable or timed out.
        Unavailable { message: String } => "search index is unavailable: {message}",
        /// The index refused the document.
        Rejected { message: String } => "search index rejected the document: {message}",
    }
}

/// Upserts JSON documents by identifier into named collections.
///
/// Indexing an existing identifier replaces the stored document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Store `document` under `id` in `collection`.
    async fn index(
        &self,
        collection: &str,
        id: &str,
        document: &Value,
    ) -> Result<(), SearchIndexError>;
}
