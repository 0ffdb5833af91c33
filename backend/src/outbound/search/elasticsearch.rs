//! Reqwest-backed search index adapter for the Elasticsearch document API.
//!
//! Documents are written with `PUT {base}/{collection}/_doc/{id}`, which
//! creates or replaces the document under that identifier.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;
use serde_json::Value;
use tracing::debug;

use crate::domain::ports::{SearchIndex, SearchIndexError};

/// [`SearchIndex`] backed by an Elasticsearch-compatible HTTP endpoint.
pub struct ElasticsearchIndex {
    client: Client,
    base_url: Url,
}

impl ElasticsearchIndex {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn document_url(&self, collection: &str, id: &str) -> Result<Url, SearchIndexError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SearchIndexError::rejected("search base URL cannot carry a path"))?
            .pop_if_empty()
            .extend([collection, "_doc", id]);
        Ok(url)
    }
}

#[async_trait]
impl SearchIndex for ElasticsearchIndex {
    async fn index(
        &self,
        collection: &str,
        id: &str,
        document: &Value,
    ) -> Result<(), SearchIndexError> {
        let url = self.document_url(collection, id)?;
        let response = self
            .client
            .put(url)
            .json(document)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.map_err(map_transport_error)?;
            return Err(map_status_error(status, body.as_ref()));
        }

        debug!(collection, id, status = status.as_u16(), "indexed document");
        Ok(())
    }
}

fn map_transport_error(error: reqwest::Error) -> SearchIndexError {
    if error.is_timeout() {
        SearchIndexError::unavailable(format!("timed out: {error}"))
    } else {
        SearchIndexError::unavailable(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SearchIndexError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::REQUEST_TIMEOUT
        | StatusCode::GATEWAY_TIMEOUT => SearchIndexError::unavailable(message),
        _ if status.is_client_error() => SearchIndexError::rejected(message),
        _ => SearchIndexError::unavailable(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
