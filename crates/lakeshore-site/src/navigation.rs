//! Site navigation shared by the desktop header and the mobile menu.

use serde::Serialize;

/// Navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            children: Vec::new(),
        }
    }

    /// Whether this entry is active for `current_path`.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active_path(current_path, &self.href)
    }
}

const NAV: [(&str, &str); 8] = [
    ("Home", "/"),
    ("Our Cats", "/cats"),
    ("Available Kittens", "/kittens"),
    ("Gallery", "/gallery"),
    ("Blog", "/blog"),
    ("FAQ", "/faq"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

/// Top-level navigation, in display order.
#[must_use]
pub fn nav_items() -> Vec<NavItem> {
    NAV.iter()
        .map(|(label, href)| NavItem::new(*label, *href))
        .collect()
}

/// Whether a nav entry pointing at `href` is active on `current_path`.
///
/// Non-root entries also match nested routes (`/kittens/pip` activates
/// `/kittens`). The root entry only matches `/` itself.
#[must_use]
pub fn is_active_path(current_path: &str, href: &str) -> bool {
    current_path == href || (href != "/" && current_path.starts_with(href))
}
