//! Content listing commands: `cats`, `kittens`, `past-kittens`, `blog`,
//! `faq` and `pages`.

use clap::Args;
use lakeshore_content::format::{calculate_age_today, format_date, format_price};
use lakeshore_content::{Cat, Kitten, KittenStatus};
use lakeshore_site::{SeoMeta, status_badge_class};
use serde::Serialize;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Cat or kitten with display fields.
#[derive(Serialize)]
struct Listed<'a, T: Serialize> {
    #[serde(flatten)]
    item: &'a T,
    age: String,
    status_badge: &'static str,
}

#[derive(Serialize)]
struct ListedKitten<'a> {
    #[serde(flatten)]
    listed: Listed<'a, Kitten>,
    price_label: String,
    go_home_label: String,
}

fn listed_cat(cat: &Cat) -> Listed<'_, Cat> {
    Listed {
        item: cat,
        age: calculate_age_today(cat.dob.as_deref()),
        status_badge: status_badge_class(cat.status.label()),
    }
}

fn listed_kitten(kitten: &Kitten) -> ListedKitten<'_> {
    ListedKitten {
        listed: Listed {
            item: kitten,
            age: calculate_age_today(kitten.dob.as_deref()),
            status_badge: status_badge_class(kitten.status.label()),
        },
        price_label: format_price(kitten.price),
        go_home_label: format_date(kitten.go_home_date.as_deref()),
    }
}

/// Content with its page metadata.
#[derive(Serialize)]
struct WithSeo<'a, T: Serialize> {
    #[serde(flatten)]
    item: &'a T,
    seo: SeoMeta,
}

fn not_found(kind: &str, slug: &str) -> CliError {
    CliError::NotFound(format!("No published {kind} with slug {slug:?}"))
}

fn parse_kitten_status(value: &str) -> Result<KittenStatus, String> {
    KittenStatus::from_label(value)
        .ok_or_else(|| format!("unknown status {value:?} (Available, Reserved, Sold, Keeping)"))
}

/// Arguments for the cats command.
#[derive(Args)]
pub(crate) struct CatsArgs {
    /// Show a single cat by slug.
    #[arg(long)]
    slug: Option<String>,
}

impl CatsArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let ctx = global.context()?;
        let output = Output::new();

        if let Some(slug) = self.slug {
            let cat = ctx.client.cat_by_slug(&slug).ok_or_else(|| not_found("cat", &slug))?;
            return output.json(&listed_cat(&cat));
        }

        let cats = ctx.client.cats();
        output.json(&cats.iter().map(listed_cat).collect::<Vec<_>>())
    }
}

/// Arguments for the kittens command.
#[derive(Args)]
pub(crate) struct KittensArgs {
    /// Only kittens with this status (Available, Reserved, Sold, Keeping).
    #[arg(long, value_parser = parse_kitten_status)]
    status: Option<KittenStatus>,

    /// Show a single kitten by slug.
    #[arg(long, conflicts_with = "status")]
    slug: Option<String>,

    /// Fetch mother and father records.
    #[arg(long)]
    resolve_parents: bool,
}

impl KittensArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let ctx = global.context()?;
        let output = Output::new();

        if let Some(slug) = self.slug {
            let mut kitten = ctx
                .client
                .kitten_by_slug(&slug)
                .ok_or_else(|| not_found("kitten", &slug))?;
            if self.resolve_parents {
                kitten = ctx.client.resolve_kitten_parents(&kitten);
            }
            return output.json(&listed_kitten(&kitten));
        }

        let mut kittens = ctx.client.kittens(self.status);
        if self.resolve_parents {
            kittens = ctx.client.resolve_kittens_parents(&kittens);
        }
        output.json(&kittens.iter().map(listed_kitten).collect::<Vec<_>>())
    }
}

/// Arguments for the past-kittens command.
#[derive(Args)]
pub(crate) struct PastKittensArgs {
    /// Fetch mother and father records.
    #[arg(long)]
    resolve_parents: bool,
}

impl PastKittensArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let ctx = global.context()?;

        let mut kittens = ctx.client.past_kittens();
        if self.resolve_parents {
            kittens = ctx.client.resolve_past_kittens_parents(&kittens);
        }
        Output::new().json(&kittens)
    }
}

/// Arguments for the blog command.
#[derive(Args)]
pub(crate) struct BlogArgs {
    /// Only posts in this category.
    #[arg(long)]
    category: Option<String>,

    /// Show a single post by slug, with page metadata.
    #[arg(long, conflicts_with = "category")]
    slug: Option<String>,
}

impl BlogArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let ctx = global.context()?;
        let output = Output::new();

        if let Some(slug) = self.slug {
            let post = ctx
                .client
                .blog_post_by_slug(&slug)
                .ok_or_else(|| not_found("post", &slug))?;
            let seo = SeoMeta::for_blog_post(&post, &ctx.config.site.base_url);
            return output.json(&WithSeo { item: &post, seo });
        }

        let posts = match self.category {
            Some(category) => ctx.client.blog_posts_by_category(&category),
            None => ctx.client.blog_posts(),
        };
        output.json(&posts)
    }
}

/// Arguments for the faq command.
#[derive(Args)]
pub(crate) struct FaqArgs {
    /// Only questions in this category.
    #[arg(long)]
    category: Option<String>,
}

impl FaqArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let ctx = global.context()?;

        let faqs = match self.category {
            Some(category) => ctx.client.faqs_by_category(&category),
            None => ctx.client.faqs(),
        };
        Output::new().json(&faqs)
    }
}

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    /// Show a single page by slug, with page metadata.
    #[arg(long)]
    slug: Option<String>,
}

impl PagesArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let ctx = global.context()?;
        let output = Output::new();

        if let Some(slug) = self.slug {
            let page = ctx.client.page(&slug).ok_or_else(|| not_found("page", &slug))?;
            let seo = SeoMeta::for_page(&page, &ctx.config.site.base_url);
            return output.json(&WithSeo { item: &page, seo });
        }

        output.json(&ctx.client.pages())
    }
}
