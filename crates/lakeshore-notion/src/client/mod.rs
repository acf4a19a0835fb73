//! Notion REST API client.
//!
//! Provides a sync HTTP client for the Notion public API with bearer-token
//! authentication.

mod databases;
mod filter;
mod pages;

use std::time::Duration;

use lakeshore_config::NotionConfig;
use lakeshore_store::{ContentStore, Filter, Record, StoreError};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use ureq::Agent;

use crate::error::NotionError;

/// Characters escaped in path segments. Notion ids are UUIDs with or
/// without hyphens.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Notion REST API client.
pub struct NotionClient {
    agent: Agent,
    base_url: String,
    api_key: String,
    version: String,
}

impl NotionClient {
    /// Create client with an explicit endpoint, token, API version and timeout.
    #[must_use]
    pub fn new(base_url: &str, api_key: &str, version: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            version: version.to_owned(),
        }
    }

    /// Create client from config values (convenience constructor).
    #[must_use]
    pub fn from_config(config: &NotionConfig) -> Self {
        Self::new(
            &config.base_url,
            &config.api_key,
            &config.version,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL from escaped path segments.
    fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        url
    }

    /// Value of the `Authorization` header.
    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Read a response body, turning error statuses into [`NotionError::HttpResponse`].
    fn read_body(response: ureq::http::Response<ureq::Body>) -> Result<String, NotionError> {
        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(NotionError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_to_string()?)
    }
}

impl ContentStore for NotionClient {
    fn query(&self, collection_id: &str, filter: &Filter) -> Result<Vec<Record>, StoreError> {
        self.query_database(collection_id, filter)
            .map_err(|e| e.into_store_error(collection_id))
    }

    fn retrieve(&self, record_id: &str) -> Result<Record, StoreError> {
        self.retrieve_page(record_id)
            .map_err(|e| e.into_store_error(record_id))
    }
}
