//! Page metadata for search engines and link previews.

use lakeshore_content::{BlogPost, Page};
use serde::Serialize;

/// Site name used in titles and as default author.
pub const SITE_NAME: &str = "Lakeshore Ragdolls";

/// Default description for pages without their own.
pub const DEFAULT_DESCRIPTION: &str =
    "Ragdoll kittens raised with love in a family home. Meet our cats and available kittens.";

/// Open Graph object type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoKind {
    #[default]
    Website,
    Article,
    Product,
}

/// Metadata for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub canonical_url: Option<String>,
    pub kind: SeoKind,
    pub published_date: Option<String>,
    pub modified_date: Option<String>,
    pub author: Option<String>,
    pub noindex: bool,
}

impl SeoMeta {
    /// Plain website metadata.
    #[must_use]
    pub fn website(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: None,
            canonical_url: None,
            kind: SeoKind::Website,
            published_date: None,
            modified_date: None,
            author: None,
            noindex: false,
        }
    }

    /// Article metadata for a blog post at `{base_url}/blog/{slug}`.
    ///
    /// The description is the SEO description, falling back to the excerpt.
    #[must_use]
    pub fn for_blog_post(post: &BlogPost, base_url: &str) -> Self {
        let description = post
            .seo_description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| post.excerpt.clone());

        Self {
            image: non_empty(&post.cover_image),
            canonical_url: Some(canonical(base_url, &["blog", &post.slug])),
            kind: SeoKind::Article,
            published_date: Some(post.published_date.clone()),
            author: Some(post.author.clone()),
            ..Self::website(&post.title, description)
        }
    }

    /// Metadata for a static page at `{base_url}/{slug}`.
    #[must_use]
    pub fn for_page(page: &Page, base_url: &str) -> Self {
        let description = page
            .seo_description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned());

        Self {
            canonical_url: Some(canonical(base_url, &[&page.slug])),
            ..Self::website(&page.title, description)
        }
    }

    /// `<title>` text: `"{title} | Lakeshore Ragdolls"`, or the site name alone.
    #[must_use]
    pub fn full_title(&self) -> String {
        if self.title.is_empty() || self.title == SITE_NAME {
            SITE_NAME.to_owned()
        } else {
            format!("{} | {SITE_NAME}", self.title)
        }
    }

    #[must_use]
    pub fn with_noindex(mut self) -> Self {
        self.noindex = true;
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

fn canonical(base_url: &str, segments: &[&str]) -> String {
    let mut url = base_url.trim_end_matches('/').to_owned();
    for segment in segments {
        url.push('/');
        url.push_str(segment);
    }
    url
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn post() -> BlogPost {
        BlogPost {
            id: "post-1".to_owned(),
            slug: "first-week-home".to_owned(),
            title: "First Week Home".to_owned(),
            cover_image: "https://cdn.example/cover.jpg".to_owned(),
            content: "<p>Hi</p>".to_owned(),
            excerpt: "What to expect".to_owned(),
            category: "Care".to_owned(),
            tags: Vec::new(),
            author: "Lakeshore Ragdolls".to_owned(),
            published_date: "2024-02-01".to_owned(),
            seo_description: None,
        }
    }

    #[test]
    fn test_blog_post_meta() {
        let meta = SeoMeta::for_blog_post(&post(), "https://lakeshoreragdolls.com/");

        assert_eq!(
            meta,
            SeoMeta {
                title: "First Week Home".to_owned(),
                description: "What to expect".to_owned(),
                image: Some("https://cdn.example/cover.jpg".to_owned()),
                canonical_url: Some(
                    "https://lakeshoreragdolls.com/blog/first-week-home".to_owned()
                ),
                kind: SeoKind::Article,
                published_date: Some("2024-02-01".to_owned()),
                modified_date: None,
                author: Some("Lakeshore Ragdolls".to_owned()),
                noindex: false,
            }
        );
    }

    #[test]
    fn test_blog_post_prefers_seo_description() {
        let mut post = post();
        post.seo_description = Some("Settling in".to_owned());
        post.cover_image = String::new();

        let meta = SeoMeta::for_blog_post(&post, "https://lakeshoreragdolls.com");

        assert_eq!(meta.description, "Settling in");
        assert_eq!(meta.image, None);
    }

    #[test]
    fn test_page_meta() {
        let page = Page {
            id: "page-1".to_owned(),
            slug: "about".to_owned(),
            title: "About".to_owned(),
            content: String::new(),
            seo_description: None,
        };

        let meta = SeoMeta::for_page(&page, "https://lakeshoreragdolls.com");

        assert_eq!(meta.kind, SeoKind::Website);
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
        assert_eq!(
            meta.canonical_url.as_deref(),
            Some("https://lakeshoreragdolls.com/about")
        );
        assert_eq!(meta.full_title(), "About | Lakeshore Ragdolls");
    }

    #[test]
    fn test_full_title_for_home() {
        assert_eq!(
            SeoMeta::website(SITE_NAME, DEFAULT_DESCRIPTION).full_title(),
            "Lakeshore Ragdolls"
        );
        assert!(SeoMeta::website("", "").with_noindex().noindex);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_value(SeoKind::Article).unwrap();
        assert_eq!(json, serde_json::json!("article"));
    }
}
