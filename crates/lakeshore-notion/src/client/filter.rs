//! Filter encoding for database queries.

use lakeshore_store::Filter;
use serde_json::{Value, json};

/// Encode a [`Filter`] as a Notion database filter object.
pub(super) fn filter_to_json(filter: &Filter) -> Value {
    match filter {
        Filter::Checkbox { property, equals } => json!({
            "property": property,
            "checkbox": { "equals": equals },
        }),
        Filter::Select { property, equals } => json!({
            "property": property,
            "select": { "equals": equals },
        }),
        Filter::RichText { property, equals } => json!({
            "property": property,
            "rich_text": { "equals": equals },
        }),
        Filter::And(filters) => json!({
            "and": filters.iter().map(filter_to_json).collect::<Vec<_>>(),
        }),
    }
}
