//! Content store abstraction for the Lakeshore content layer.
//!
//! This crate provides a [`ContentStore`] trait for abstracting record queries
//! and retrieval from the external content service. This enables:
//!
//! - **Unit testing** without network access
//! - **Backend flexibility** (Notion today, anything with databases of typed records)
//! - **Clean separation** between domain transformation and I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ContentStore`] trait with `query()` and `retrieve()` methods
//! - [`Record`] with its [`Properties`] bag of tagged [`PropertyValue`]s
//! - [`Filter`] expressions for conjunctions of field-equality predicates
//! - [`MockStore`] for testing (behind `mock` feature flag)
//!
//! The record types deserialize directly from the Notion page object layout.
//!
//! # Example
//!
//! ```ignore
//! use lakeshore_store::{ContentStore, Filter};
//!
//! let filter = Filter::checkbox("Published", true);
//! let records = store.query("cats-database-id", &filter)?;
//! for record in records {
//!     println!("{}: {} properties", record.id, record.properties.len());
//! }
//! ```

mod filter;
#[cfg(feature = "mock")]
mod mock;
mod record;
mod store;

pub use filter::Filter;
#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use record::{
    Annotations, DateValue, FileObject, FileUrl, Link, Properties, PropertyKind, PropertyValue,
    Record, RelationRef, RichText, RichTextKind, SelectOption, TextContent,
};
pub use store::{ContentStore, ErrorStatus, StoreError, StoreErrorKind};
