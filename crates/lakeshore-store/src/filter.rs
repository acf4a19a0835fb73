//! Query filter expressions.
//!
//! Filters are conjunctions of field-equality predicates over checkbox,
//! select and rich-text fields, the subset of the Notion filter grammar this
//! layer issues.

use crate::record::{Properties, PropertyValue};

/// Filter expression for [`ContentStore::query`](crate::ContentStore::query).
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Checkbox field equals the given flag.
    Checkbox { property: String, equals: bool },
    /// Select field's option name equals the given value.
    Select { property: String, equals: String },
    /// Rich-text field's full plain text equals the given value.
    RichText { property: String, equals: String },
    /// All nested filters must match.
    And(Vec<Filter>),
}

impl Filter {
    #[must_use]
    pub fn checkbox(property: impl Into<String>, equals: bool) -> Self {
        Self::Checkbox {
            property: property.into(),
            equals,
        }
    }

    #[must_use]
    pub fn select(property: impl Into<String>, equals: impl Into<String>) -> Self {
        Self::Select {
            property: property.into(),
            equals: equals.into(),
        }
    }

    #[must_use]
    pub fn rich_text(property: impl Into<String>, equals: impl Into<String>) -> Self {
        Self::RichText {
            property: property.into(),
            equals: equals.into(),
        }
    }

    /// Conjunction of `self` and `other`.
    ///
    /// Flattens into an existing `And` instead of nesting.
    #[must_use]
    pub fn and(self, other: Filter) -> Self {
        match self {
            Self::And(mut filters) => {
                filters.push(other);
                Self::And(filters)
            }
            first => Self::And(vec![first, other]),
        }
    }

    /// Evaluate the filter against a property bag.
    ///
    /// Missing fields and fields of another kind never match.
    #[must_use]
    pub fn matches(&self, properties: &Properties) -> bool {
        match self {
            Self::Checkbox { property, equals } => matches!(
                properties.get(property),
                Some(PropertyValue::Checkbox { checkbox }) if checkbox == equals
            ),
            Self::Select { property, equals } => matches!(
                properties.get(property),
                Some(PropertyValue::Select { select: Some(option) }) if &option.name == equals
            ),
            Self::RichText { property, equals } => match properties.get(property) {
                Some(PropertyValue::RichText { rich_text }) => {
                    let text: String = rich_text.iter().map(|s| s.plain_text.as_str()).collect();
                    &text == equals
                }
                _ => false,
            },
            Self::And(filters) => filters.iter().all(|f| f.matches(properties)),
        }
    }
}
