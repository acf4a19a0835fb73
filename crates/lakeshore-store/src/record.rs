//! Raw record types.
//!
//! A [`Record`] is one item returned by the content store: an identifier plus
//! a [`Properties`] bag mapping field names to tagged [`PropertyValue`]s. The
//! serde layout follows the Notion page object, so API responses deserialize
//! without an intermediate wire type.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Field name to tagged value mapping.
pub type Properties = HashMap<String, PropertyValue>;

/// One record from the content store.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Record {
    /// Record identifier.
    pub id: String,
    /// Property bag.
    pub properties: Properties,
}

impl Record {
    /// Create a record with an empty property bag.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: Properties::new(),
        }
    }

    /// Add a property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Look up a property by field name.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

/// Tagged property value, one variant per field kind.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<SelectOption>,
    },
    Number {
        number: Option<f64>,
    },
    Checkbox {
        #[serde(default)]
        checkbox: bool,
    },
    Date {
        date: Option<DateValue>,
    },
    Files {
        #[serde(default)]
        files: Vec<FileObject>,
    },
    Relation {
        #[serde(default)]
        relation: Vec<RelationRef>,
    },
    Url {
        url: Option<String>,
    },
    /// Any field kind this layer does not read (formula, rollup, people, ...).
    #[serde(other)]
    Unsupported,
}

impl PropertyValue {
    /// Title field with a single plain span.
    #[must_use]
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title {
            title: vec![RichText::text(text)],
        }
    }

    /// Rich-text field with a single plain span.
    #[must_use]
    pub fn rich_text(text: impl Into<String>) -> Self {
        Self::RichText {
            rich_text: vec![RichText::text(text)],
        }
    }

    /// Rich-text field with the given spans.
    #[must_use]
    pub fn rich_text_spans(spans: Vec<RichText>) -> Self {
        Self::RichText { rich_text: spans }
    }

    /// Select field with the named option.
    #[must_use]
    pub fn select(name: impl Into<String>) -> Self {
        Self::Select {
            select: Some(SelectOption::named(name)),
        }
    }

    /// Multi-select field with the named options.
    #[must_use]
    pub fn multi_select<S: AsRef<str>>(names: &[S]) -> Self {
        Self::MultiSelect {
            multi_select: names
                .iter()
                .map(|n| SelectOption::named(n.as_ref()))
                .collect(),
        }
    }

    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number {
            number: Some(value),
        }
    }

    #[must_use]
    pub fn checkbox(value: bool) -> Self {
        Self::Checkbox { checkbox: value }
    }

    /// Date field with only a start value.
    #[must_use]
    pub fn date(start: impl Into<String>) -> Self {
        Self::Date {
            date: Some(DateValue {
                start: start.into(),
                end: None,
                time_zone: None,
            }),
        }
    }

    #[must_use]
    pub fn files(files: Vec<FileObject>) -> Self {
        Self::Files { files }
    }

    /// Relation field referencing the given record ids.
    #[must_use]
    pub fn relation<S: AsRef<str>>(ids: &[S]) -> Self {
        Self::Relation {
            relation: ids
                .iter()
                .map(|id| RelationRef {
                    id: id.as_ref().to_owned(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn url(value: impl Into<String>) -> Self {
        Self::Url {
            url: Some(value.into()),
        }
    }

    /// Field kind of this value.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Title { .. } => PropertyKind::Title,
            Self::RichText { .. } => PropertyKind::RichText,
            Self::Select { .. } => PropertyKind::Select,
            Self::MultiSelect { .. } => PropertyKind::MultiSelect,
            Self::Number { .. } => PropertyKind::Number,
            Self::Checkbox { .. } => PropertyKind::Checkbox,
            Self::Date { .. } => PropertyKind::Date,
            Self::Files { .. } => PropertyKind::Files,
            Self::Relation { .. } => PropertyKind::Relation,
            Self::Url { .. } => PropertyKind::Url,
            Self::Unsupported => PropertyKind::Unsupported,
        }
    }
}

/// Field kind tag, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Title,
    RichText,
    Select,
    MultiSelect,
    Number,
    Checkbox,
    Date,
    Files,
    Relation,
    Url,
    Unsupported,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::RichText => "rich_text",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Files => "files",
            Self::Relation => "relation",
            Self::Url => "url",
            Self::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// One formatted span of rich text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RichText {
    /// Span type.
    #[serde(rename = "type", default)]
    pub kind: RichTextKind,
    /// Text payload (present for `text` spans).
    #[serde(default)]
    pub text: Option<TextContent>,
    /// Formatting flags.
    #[serde(default)]
    pub annotations: Annotations,
    /// Unformatted text, present for every span type.
    #[serde(default)]
    pub plain_text: String,
    /// Link target, if any.
    #[serde(default)]
    pub href: Option<String>,
}

impl RichText {
    /// Unannotated text span.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            kind: RichTextKind::Text,
            text: Some(TextContent {
                content: content.clone(),
                link: None,
            }),
            annotations: Annotations::default(),
            plain_text: content,
            href: None,
        }
    }

    /// Mention span (user, page, date); carries only plain text.
    #[must_use]
    pub fn mention(plain_text: impl Into<String>) -> Self {
        Self {
            kind: RichTextKind::Mention,
            text: None,
            annotations: Annotations::default(),
            plain_text: plain_text.into(),
            href: None,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.annotations.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.annotations.italic = true;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.annotations.underline = true;
        self
    }

    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.annotations.strikethrough = true;
        self
    }

    #[must_use]
    pub fn code(mut self) -> Self {
        self.annotations.code = true;
        self
    }

    /// Attach a link to a text span.
    #[must_use]
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if let Some(text) = self.text.as_mut() {
            text.link = Some(Link { url: url.clone() });
        }
        self.href = Some(url);
        self
    }
}

/// Rich-text span type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RichTextKind {
    #[default]
    Text,
    Mention,
    Equation,
    #[serde(other)]
    Other,
}

/// Text payload of a `text` span.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

/// Hyperlink target.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Link {
    pub url: String,
}

/// Formatting flags of a span.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: "default".to_owned(),
        }
    }
}

/// Option of a select or multi-select field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl SelectOption {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
        }
    }
}

/// Date or date range.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DateValue {
    /// ISO 8601 date or datetime.
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// File reference: hosted by the content store or external.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileObject {
    /// Natively hosted file (signed, expiring URL).
    File {
        #[serde(default)]
        name: Option<String>,
        file: FileUrl,
    },
    /// Externally hosted file.
    External {
        #[serde(default)]
        name: Option<String>,
        external: FileUrl,
    },
    #[serde(other)]
    Unsupported,
}

impl FileObject {
    /// Natively hosted file reference.
    #[must_use]
    pub fn hosted(url: impl Into<String>) -> Self {
        Self::File {
            name: None,
            file: FileUrl::new(url),
        }
    }

    /// Externally hosted file reference.
    #[must_use]
    pub fn external(url: impl Into<String>) -> Self {
        Self::External {
            name: None,
            external: FileUrl::new(url),
        }
    }

    /// Resolved URL, or `None` if the reference has no usable URL.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        let url = match self {
            Self::File { file, .. } => file.url.as_str(),
            Self::External { external, .. } => external.url.as_str(),
            Self::Unsupported => return None,
        };
        (!url.is_empty()).then_some(url)
    }
}

/// URL of a file reference.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileUrl {
    pub url: String,
    #[serde(default)]
    pub expiry_time: Option<String>,
}

impl FileUrl {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            expiry_time: None,
        }
    }
}

/// Reference to another record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelationRef {
    pub id: String,
}
