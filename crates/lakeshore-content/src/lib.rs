//! Content layer for the Lakeshore Ragdolls website.
//!
//! Turns raw [`Record`](lakeshore_store::Record)s from a
//! [`ContentStore`](lakeshore_store::ContentStore) into domain objects:
//!
//! - [`property`]: typed extraction from a record's property bag
//! - [`rich_text`]: rich-text spans to HTML or plain text
//! - [`transform`]: one transformer per entity
//! - [`ContentClient`]: published-only queries and by-slug lookups
//! - parent resolution for kittens ([`ContentClient::resolve_kittens_parents`])
//! - [`format`]: slug, date, age and price helpers
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use lakeshore_content::{Collections, ContentClient};
//!
//! let client = ContentClient::new(Arc::new(store), collections);
//! let kittens = client.resolve_kittens_parents(&client.available_kittens());
//! for kitten in &kittens {
//!     println!("{} ({:?})", kitten.name, kitten.mother.cat.as_ref().map(|c| &c.name));
//! }
//! ```

mod client;
pub mod format;
pub mod property;
mod resolve;
pub mod rich_text;
pub mod transform;
mod types;

pub use client::{Collection, Collections, ContentClient, ContentError};
pub use resolve::HasParents;
pub use types::{
    BlogPost, Cat, CatStatus, Faq, Gender, Kitten, KittenStatus, Page, ParentLink, PastKitten,
};
