//! Presentation state for the Lakeshore Ragdolls website.
//!
//! - [`nav_items`] and [`is_active_path`]: the shared site navigation
//! - [`MobileMenu`]: open/closed disclosure menu with scoped side effects
//! - [`SeoMeta`]: per-page metadata built from content
//! - [`status_badge_class`]: CSS classes for status labels

mod badge;
pub mod menu;
mod navigation;
mod seo;

pub use badge::status_badge_class;
pub use menu::{MenuEvent, MenuHost, MenuLink, MenuState, MenuView, MobileMenu};
pub use navigation::{NavItem, is_active_path, nav_items};
pub use seo::{SeoKind, SeoMeta};
