//! CLI command implementations.

mod check;
mod content;
mod nav;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use lakeshore_config::{CliSettings, CollectionsConfig, Config};
use lakeshore_content::{Collections, ContentClient};
use lakeshore_notion::NotionClient;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use content::{BlogArgs, CatsArgs, FaqArgs, KittensArgs, PagesArgs, PastKittensArgs};
pub(crate) use nav::NavArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover lakeshore.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Notion integration token (overrides config).
    #[arg(long, env = "NOTION_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Notion API base URL (overrides config).
    #[arg(long, global = true)]
    notion_url: Option<String>,

    /// Public site URL for canonical links (overrides config).
    #[arg(long, global = true)]
    site_url: Option<String>,

    /// Enable verbose output (request logs).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Loaded configuration plus a content client bound to it.
pub(crate) struct Context {
    pub config: Config,
    pub client: ContentClient,
}

impl GlobalArgs {
    /// Load config and connect a content client.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded or has no valid
    /// `[notion]` section.
    pub(crate) fn context(&self) -> Result<Context, CliError> {
        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        let notion = NotionClient::from_config(config.require_notion()?);
        let client = ContentClient::new(Arc::new(notion), collections(&config.collections));
        Ok(Context { config, client })
    }

    /// Overrides taken from command-line flags.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            api_key: self.api_key.clone(),
            notion_base_url: self.notion_url.clone(),
            site_base_url: self.site_url.clone(),
        }
    }
}

/// Map configured collection ids onto the content layer's bindings.
fn collections(config: &CollectionsConfig) -> Collections {
    Collections {
        cats: config.cats.clone(),
        kittens: config.kittens.clone(),
        past_kittens: config.past_kittens.clone(),
        blog: config.blog.clone(),
        faq: config.faq.clone(),
        pages: config.pages.clone(),
    }
}
