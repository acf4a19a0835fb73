//! Mobile navigation menu.
//!
//! The menu is a two-state machine. Entering [`MenuState::Open`] locks page
//! scroll and registers an escape-key listener on the [`MenuHost`]; both are
//! held by an [`OpenSession`] and released when it is dropped, so every way
//! out of `Open` restores the page exactly once.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::navigation::{NavItem, is_active_path, nav_items};

/// Call-to-action shown at the bottom of the open menu.
pub const CTA_LABEL: &str = "Join Waitlist";
pub const CTA_HREF: &str = "/waitlist";

/// Page environment the menu acts on.
pub trait MenuHost {
    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    fn add_escape_listener(&self);
    fn remove_escape_listener(&self);
}

/// Side effects held while the menu is open.
pub struct OpenSession<H: MenuHost> {
    host: Arc<H>,
}

impl<H: MenuHost> OpenSession<H> {
    fn acquire(host: &Arc<H>) -> Self {
        host.add_escape_listener();
        host.lock_scroll();
        Self {
            host: Arc::clone(host),
        }
    }
}

impl<H: MenuHost> Drop for OpenSession<H> {
    fn drop(&mut self) {
        self.host.remove_escape_listener();
        self.host.unlock_scroll();
    }
}

impl<H: MenuHost> fmt::Debug for OpenSession<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenSession").finish_non_exhaustive()
    }
}

pub enum MenuState<H: MenuHost> {
    Closed,
    Open(OpenSession<H>),
}

impl<H: MenuHost> fmt::Debug for MenuState<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str("Closed"),
            Self::Open(session) => f.debug_tuple("Open").field(session).finish(),
        }
    }
}

/// Input to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger button.
    Toggle,
    /// Escape key. Only observed while open.
    Escape,
    BackdropClick,
    LinkClick,
    /// Close button inside the panel.
    Close,
}

/// Link in the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Render model of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub open: bool,
    /// `aria-label` of the toggle button.
    pub toggle_label: &'static str,
    /// Nav links; empty while closed.
    pub links: Vec<MenuLink>,
    pub cta: Option<MenuLink>,
}

/// Mobile disclosure menu. State is per instance.
pub struct MobileMenu<H: MenuHost> {
    host: Arc<H>,
    state: MenuState<H>,
    items: Vec<NavItem>,
    current_path: String,
}

impl<H: MenuHost> MobileMenu<H> {
    /// Closed menu for the page at `current_path`.
    pub fn new(host: Arc<H>, current_path: impl Into<String>) -> Self {
        Self {
            host,
            state: MenuState::Closed,
            items: nav_items(),
            current_path: current_path.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open(_))
    }

    pub fn state(&self) -> &MenuState<H> {
        &self.state
    }

    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    /// Apply an event. Returns whether the state changed.
    pub fn handle(&mut self, event: MenuEvent) -> bool {
        let open = self.is_open();
        let next_open = match event {
            MenuEvent::Toggle => !open,
            MenuEvent::Escape
            | MenuEvent::BackdropClick
            | MenuEvent::LinkClick
            | MenuEvent::Close => false,
        };
        if next_open == open {
            return false;
        }

        debug!("Mobile menu {:?}: open={}", event, next_open);
        self.state = if next_open {
            MenuState::Open(OpenSession::acquire(&self.host))
        } else {
            MenuState::Closed
        };
        true
    }

    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.handle(MenuEvent::Toggle)
    }

    pub fn close(&mut self) -> bool {
        self.handle(MenuEvent::Close)
    }

    /// Current render model.
    pub fn view(&self) -> MenuView {
        let open = self.is_open();
        let link = |label: &str, href: &str| MenuLink {
            label: label.to_owned(),
            href: href.to_owned(),
            active: is_active_path(&self.current_path, href),
        };

        MenuView {
            open,
            toggle_label: if open { "Close menu" } else { "Open menu" },
            links: if open {
                self.items
                    .iter()
                    .map(|item| link(&item.label, &item.href))
                    .collect()
            } else {
                Vec::new()
            },
            cta: open.then(|| MenuLink {
                label: CTA_LABEL.to_owned(),
                href: CTA_HREF.to_owned(),
                active: false,
            }),
        }
    }
}
