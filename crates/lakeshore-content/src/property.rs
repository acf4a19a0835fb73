//! Typed extraction from a record's property bag.
//!
//! [`extract`] reports why a field could not be read; [`get_property`] turns
//! every failure into the caller's default and never fails.
//!
//! # Coercions
//!
//! | Field kind | Target |
//! |---|---|
//! | `title`, `rich_text` | `String` (first span's plain text) |
//! | `select` | `String` (option name), [`Gender`], [`CatStatus`], [`KittenStatus`] |
//! | `multi_select` | `Vec<String>` (option names) |
//! | `number` | `f64`, `i64` |
//! | `checkbox` | `bool` |
//! | `date` | `String` (start) |
//! | `url` | `String` |
//! | `files` | `Vec<String>` (resolved URLs) |
//! | `relation` | `Vec<String>` (record ids) |

use lakeshore_store::{FileObject, Properties, PropertyKind, PropertyValue};
use tracing::trace;

use crate::rich_text::rich_text_to_html;
use crate::types::{CatStatus, Gender, KittenStatus};

/// Reason a property could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// No field with that name.
    #[error("property is missing")]
    Missing,

    /// Field exists but holds no value.
    #[error("property is empty")]
    Empty,

    /// Field kind cannot be coerced to the requested type.
    #[error("expected {expected}, found {found} property")]
    Mismatch {
        expected: &'static str,
        found: PropertyKind,
    },

    /// Select option name is not one of the known labels.
    #[error("unrecognized option {0:?}")]
    Unrecognized(String),
}

/// Types that can be read out of a [`PropertyValue`].
pub trait FromProperty: Sized {
    fn from_property(value: &PropertyValue) -> Result<Self, ExtractError>;
}

/// Extract a typed value from the field named `key`.
pub fn extract<T: FromProperty>(properties: &Properties, key: &str) -> Result<T, ExtractError> {
    let value = properties.get(key).ok_or(ExtractError::Missing)?;
    T::from_property(value)
}

/// Read the field named `key`, or `default` if it is absent, empty or of
/// another kind.
pub fn get_property<T: FromProperty>(properties: &Properties, key: &str, default: T) -> T {
    match extract(properties, key) {
        Ok(value) => value,
        Err(e) => {
            trace!("Property {:?}: {}, using default", key, e);
            default
        }
    }
}

/// Read the field named `key`, or `None` if it cannot be extracted.
pub fn get_optional<T: FromProperty>(properties: &Properties, key: &str) -> Option<T> {
    match extract(properties, key) {
        Ok(value) => Some(value),
        Err(e) => {
            trace!("Property {:?}: {}", key, e);
            None
        }
    }
}

/// HTML of a `rich_text` field, or `""` for any other field kind.
pub fn get_rich_text_html(properties: &Properties, key: &str) -> String {
    match properties.get(key) {
        Some(PropertyValue::RichText { rich_text }) => rich_text_to_html(rich_text),
        _ => String::new(),
    }
}

/// Resolved URLs of hosted and external file references, in order.
///
/// References without a usable URL are skipped.
pub fn extract_file_urls(files: &[FileObject]) -> Vec<String> {
    files
        .iter()
        .filter_map(FileObject::url)
        .map(str::to_owned)
        .collect()
}

fn mismatch(expected: &'static str, value: &PropertyValue) -> ExtractError {
    ExtractError::Mismatch {
        expected,
        found: value.kind(),
    }
}

fn non_empty(values: Vec<String>) -> Result<Vec<String>, ExtractError> {
    if values.is_empty() {
        Err(ExtractError::Empty)
    } else {
        Ok(values)
    }
}

fn select_name<'a>(value: &'a PropertyValue, expected: &'static str) -> Result<&'a str, ExtractError> {
    match value {
        PropertyValue::Select { select } => select
            .as_ref()
            .map(|option| option.name.as_str())
            .ok_or(ExtractError::Empty),
        other => Err(mismatch(expected, other)),
    }
}

impl FromProperty for String {
    fn from_property(value: &PropertyValue) -> Result<Self, ExtractError> {
        match value {
            PropertyValue::Title { title: spans } | PropertyValue::RichText { rich_text: spans } => {
                spans
                    .first()
                    .map(|span| span.plain_text.clone())
                    .ok_or(ExtractError::Empty)
            }
            PropertyValue::Select { .. } => select_name(value, "text").map(str::to_owned),
            PropertyValue::Date { date } => date
                .as_ref()
                .map(|date| date.start.clone())
                .ok_or(ExtractError::Empty),
            PropertyValue::Url { url } => url.clone().ok_or(ExtractError::Empty),
            other => Err(mismatch("text", other)),
        }
    }
}

impl FromProperty for f64 {
    fn from_property(value: &PropertyValue) -> Result<Self, ExtractError> {
        match value {
            PropertyValue::Number { number } => number.ok_or(ExtractError::Empty),
            other => Err(mismatch("number", other)),
        }
    }
}

impl FromProperty for i64 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_property(value: &PropertyValue) -> Result<Self, ExtractError> {
        f64::from_property(value).map(|number| number.trunc() as i64)
    }
}

impl FromProperty for bool {
    fn from_property(value: &PropertyValue) -> Result<Self, ExtractError> {
        match value {
            PropertyValue::Checkbox { checkbox } => Ok(*checkbox),
            other => Err(mismatch("checkbox", other)),
        }
    }
}

impl FromProperty for Vec<String> {
    fn from_property(value: &PropertyValue) -> Result<Self, ExtractError> {
        match value {
            PropertyValue::MultiSelect { multi_select } => {
                non_empty(multi_select.iter().map(|o| o.name.clone()).collect())
            }
            PropertyValue::Files { files } => non_empty(extract_file_urls(files)),
            PropertyValue::Relation { relation } => {
                non_empty(relation.iter().map(|r| r.id.clone()).collect())
            }
            other => Err(mismatch("list", other)),
        }
    }
}

impl FromProperty for Gender {
    fn from_property(value: &PropertyValue) -> Result<Self, ExtractError> {
        let name = select_name(value, "gender select")?;
        Self::from_label(name).ok_or_else(|| ExtractError::Unrecognized(name.to_owned()))
    }
}

impl FromProperty for CatStatus {
    fn from_property(value: &PropertyValue) -> Result<Self, ExtractError> {
        let name = select_name(value, "cat status select")?;
        Self::from_label(name).ok_or_else(|| ExtractError::Unrecognized(name.to_owned()))
    }
}

impl FromProperty for KittenStatus {
    fn from_property(value: &PropertyValue) -> Result<Self, ExtractError> {
        let name = select_name(value, "kitten status select")?;
        Self::from_label(name).ok_or_else(|| ExtractError::Unrecognized(name.to_owned()))
    }
}
