//! Domain types for site content.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Cat or kitten sex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    #[default]
    Female,
}

/// Breeding status of an adult cat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum CatStatus {
    #[default]
    Active,
    Retired,
    #[serde(rename = "Guardian Home")]
    GuardianHome,
}

/// Sale status of a kitten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum KittenStatus {
    #[default]
    Available,
    Reserved,
    Sold,
    Keeping,
}

impl Gender {
    /// Parse the select option label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl CatStatus {
    /// Parse the select option label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Active" => Some(Self::Active),
            "Retired" => Some(Self::Retired),
            "Guardian Home" => Some(Self::GuardianHome),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Retired => "Retired",
            Self::GuardianHome => "Guardian Home",
        }
    }
}

impl KittenStatus {
    /// Parse the select option label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Available" => Some(Self::Available),
            "Reserved" => Some(Self::Reserved),
            "Sold" => Some(Self::Sold),
            "Keeping" => Some(Self::Keeping),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Sold => "Sold",
            Self::Keeping => "Keeping",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for CatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for KittenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reference from a kitten to one of its parents.
///
/// `cat` stays `None` until the link is explicitly resolved, even when `id`
/// is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParentLink {
    pub id: Option<String>,
    pub cat: Option<Arc<Cat>>,
}

impl ParentLink {
    /// Unresolved link to `id`.
    #[must_use]
    pub fn unresolved(id: Option<String>) -> Self {
        Self { id, cat: None }
    }

    /// Same link with `cat` attached.
    #[must_use]
    pub fn resolved(&self, cat: Option<Arc<Cat>>) -> Self {
        Self {
            id: self.id.clone(),
            cat,
        }
    }

    /// Parent id, if present and non-empty.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Adult breeding cat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cat {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub photos: Vec<String>,
    pub cover_photo: String,
    pub dob: Option<String>,
    pub color: String,
    pub pattern: String,
    pub gender: Gender,
    pub status: CatStatus,
    pub registration: String,
    pub pedigree: String,
    /// HTML.
    pub health_testing: String,
    /// HTML.
    pub personality: String,
    pub youtube_tag: String,
    pub sort_order: i64,
}

/// Kitten currently listed on the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kitten {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub photos: Vec<String>,
    pub cover_photo: String,
    pub dob: Option<String>,
    pub color: String,
    pub pattern: String,
    pub gender: Gender,
    pub status: KittenStatus,
    pub mother: ParentLink,
    pub father: ParentLink,
    pub price: Option<f64>,
    pub reserved_by: Option<String>,
    pub deposit_paid: bool,
    /// HTML.
    pub personality: String,
    pub youtube_tag: String,
    pub go_home_date: Option<String>,
    pub litter: String,
}

/// Kitten that has already gone to its new home.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PastKitten {
    pub id: String,
    pub name: String,
    pub photos: Vec<String>,
    pub cover_photo: String,
    pub dob: Option<String>,
    pub color: String,
    pub gender: Gender,
    pub mother: ParentLink,
    pub father: ParentLink,
    pub went_home: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub cover_image: String,
    /// HTML.
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    /// ISO 8601 timestamp or date.
    pub published_date: String,
    pub seo_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    /// HTML.
    pub answer: String,
    pub category: String,
    pub sort_order: i64,
}

/// Static content page (about, contact, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// HTML.
    pub content: String,
    pub seo_description: Option<String>,
}
