//! Notion integration for the Lakeshore content layer.
//!
//! This crate provides [`NotionClient`], a blocking REST client for the
//! Notion API that implements [`ContentStore`](lakeshore_store::ContentStore):
//! - database queries with a JSON filter body
//! - page retrieval by id
//!
//! # API Client
//!
//! ```ignore
//! use lakeshore_config::NotionConfig;
//! use lakeshore_notion::NotionClient;
//! use lakeshore_store::{ContentStore, Filter};
//!
//! let client = NotionClient::from_config(&NotionConfig::with_api_key("secret_..."));
//! let cats = client.query("cats-database-id", &Filter::checkbox("Published", true))?;
//! println!("{} published cats", cats.len());
//! ```

// API client
mod client;
pub use client::NotionClient;

// Errors
pub mod error;
pub use error::NotionError;
