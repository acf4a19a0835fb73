//! Lakeshore CLI - site content from Notion.
//!
//! Provides commands for:
//! - `cats`, `kittens`, `past-kittens`, `blog`, `faq`, `pages`: dump published
//!   content as JSON
//! - `nav`: show the site navigation for a path
//! - `check`: verify every configured collection can be queried

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    BlogArgs, CatsArgs, CheckArgs, FaqArgs, GlobalArgs, KittensArgs, NavArgs, PagesArgs,
    PastKittensArgs,
};
use output::Output;

/// Lakeshore - site content from Notion.
#[derive(Parser)]
#[command(name = "lakeshore", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List published cats.
    Cats(CatsArgs),
    /// List published kittens.
    Kittens(KittensArgs),
    /// List kittens that have gone home.
    PastKittens(PastKittensArgs),
    /// List blog posts.
    Blog(BlogArgs),
    /// List frequently asked questions.
    Faq(FaqArgs),
    /// List static pages.
    Pages(PagesArgs),
    /// Show site navigation.
    Nav(NavArgs),
    /// Check that every collection can be queried.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let global = &cli.global;
    let result = match cli.command {
        Commands::Cats(args) => args.execute(global),
        Commands::Kittens(args) => args.execute(global),
        Commands::PastKittens(args) => args.execute(global),
        Commands::Blog(args) => args.execute(global),
        Commands::Faq(args) => args.execute(global),
        Commands::Pages(args) => args.execute(global),
        Commands::Nav(args) => args.execute(),
        Commands::Check(args) => args.execute(global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
