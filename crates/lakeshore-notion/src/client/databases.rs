//! Database query operations for Notion API.

use lakeshore_store::{Filter, Record};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::NotionClient;
use super::filter::filter_to_json;
use crate::error::NotionError;

/// Maximum page size accepted by the query endpoint.
const PAGE_SIZE: u32 = 100;

/// Envelope of a database query response.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<serde_json::Value>,
    #[serde(default)]
    has_more: bool,
}

impl NotionClient {
    /// Query a database for pages matching `filter` (first page of results).
    pub(crate) fn query_database(
        &self,
        database_id: &str,
        filter: &Filter,
    ) -> Result<Vec<Record>, NotionError> {
        let url = self.endpoint(&["databases", database_id, "query"]);
        let payload = json!({
            "filter": filter_to_json(filter),
            "page_size": PAGE_SIZE,
        });
        let payload_bytes = serde_json::to_vec(&payload)?;

        info!("Querying database {}", database_id);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.bearer())
            .header("Notion-Version", &self.version)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let body = Self::read_body(response)?;
        let records = parse_query_response(&body)?;
        info!("Database {} returned {} records", database_id, records.len());
        Ok(records)
    }
}

/// Decode a query response body into records.
///
/// Results that are not pages or fail to decode are skipped.
pub(super) fn parse_query_response(body: &str) -> Result<Vec<Record>, NotionError> {
    let response: QueryResponse = serde_json::from_str(body)?;

    if response.has_more {
        debug!(
            "Query returned more than {} results; only the first page is used",
            PAGE_SIZE
        );
    }

    Ok(response
        .results
        .into_iter()
        .filter(|value| value.get("object").and_then(|o| o.as_str()).unwrap_or("page") == "page")
        .filter_map(|value| match serde_json::from_value::<Record>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Skipping undecodable query result: {}", e);
                None
            }
        })
        .collect())
}
