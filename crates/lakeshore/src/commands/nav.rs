//! `lakeshore nav` command implementation.

use std::sync::Arc;

use clap::Args;
use lakeshore_site::{MenuEvent, MenuHost, MenuLink, MobileMenu, nav_items};
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Current page path used to mark active entries.
    #[arg(long, default_value = "/")]
    path: String,

    /// Render the open mobile menu instead of the plain link list.
    #[arg(long)]
    menu: bool,
}

/// Host without a page; side effects are only logged.
struct TerminalHost;

impl MenuHost for TerminalHost {
    fn lock_scroll(&self) {
        debug!("Scroll locked");
    }

    fn unlock_scroll(&self) {
        debug!("Scroll unlocked");
    }

    fn add_escape_listener(&self) {
        debug!("Escape listener added");
    }

    fn remove_escape_listener(&self) {
        debug!("Escape listener removed");
    }
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.menu {
            let mut menu = MobileMenu::new(Arc::new(TerminalHost), self.path);
            menu.handle(MenuEvent::Toggle);
            return output.json(&menu.view());
        }

        let links: Vec<MenuLink> = nav_items()
            .into_iter()
            .map(|item| MenuLink {
                active: item.is_active(&self.path),
                label: item.label,
                href: item.href,
            })
            .collect();
        output.json(&links)
    }
}
