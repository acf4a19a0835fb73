//! Page operations for Notion API.

use lakeshore_store::Record;
use tracing::info;

use super::NotionClient;
use crate::error::NotionError;

impl NotionClient {
    /// Retrieve a single page by id.
    pub(crate) fn retrieve_page(&self, page_id: &str) -> Result<Record, NotionError> {
        let url = self.endpoint(&["pages", page_id]);

        info!("Getting page {}", page_id);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.bearer())
            .header("Notion-Version", &self.version)
            .header("Accept", "application/json")
            .call()?;

        let body = Self::read_body(response)?;
        Ok(serde_json::from_str(&body)?)
    }
}
