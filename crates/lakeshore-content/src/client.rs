//! Published-content queries against a [`ContentStore`].

use std::cmp::Reverse;
use std::fmt;
use std::sync::Arc;

use lakeshore_store::{ContentStore, Filter, Record, StoreError};
use tracing::{debug, error, warn};

use crate::format::parse_timestamp;
use crate::transform::{
    transform_blog_post, transform_cat, transform_faq, transform_kitten, transform_page,
    transform_past_kitten,
};
use crate::types::{BlogPost, Cat, Faq, Kitten, KittenStatus, Page, PastKitten};

/// Field every listed record must have checked.
pub const PUBLISHED_FIELD: &str = "Published";

/// Field matched by slug lookups.
pub const SLUG_FIELD: &str = "Slug";

/// Logical content collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Cats,
    Kittens,
    PastKittens,
    Blog,
    Faq,
    Pages,
}

impl Collection {
    /// Every collection, in display order.
    pub const ALL: [Self; 6] = [
        Self::Cats,
        Self::Kittens,
        Self::PastKittens,
        Self::Blog,
        Self::Faq,
        Self::Pages,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cats => "cats",
            Self::Kittens => "kittens",
            Self::PastKittens => "past_kittens",
            Self::Blog => "blog",
            Self::Faq => "faq",
            Self::Pages => "pages",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Store identifiers bound to each collection. `None` means unconfigured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collections {
    pub cats: Option<String>,
    pub kittens: Option<String>,
    pub past_kittens: Option<String>,
    pub blog: Option<String>,
    pub faq: Option<String>,
    pub pages: Option<String>,
}

impl Collections {
    /// Store identifier for `collection`, if bound to a non-empty value.
    #[must_use]
    pub fn id(&self, collection: Collection) -> Option<&str> {
        let id = match collection {
            Collection::Cats => &self.cats,
            Collection::Kittens => &self.kittens,
            Collection::PastKittens => &self.past_kittens,
            Collection::Blog => &self.blog,
            Collection::Faq => &self.faq,
            Collection::Pages => &self.pages,
        };
        id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Error from a content query.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No store identifier is bound to the collection.
    #[error("collection {0} is not configured")]
    Unconfigured(Collection),

    /// The store request failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read-only access to published site content.
///
/// Generic operations come in two flavours: `try_*` returns the failure,
/// while the plain form logs it and degrades to an empty result.
#[derive(Clone)]
pub struct ContentClient {
    store: Arc<dyn ContentStore>,
    collections: Collections,
}

impl ContentClient {
    #[must_use]
    pub fn new(store: Arc<dyn ContentStore>, collections: Collections) -> Self {
        Self { store, collections }
    }

    #[must_use]
    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    fn collection_id(&self, collection: Collection) -> Result<&str, ContentError> {
        self.collections
            .id(collection)
            .ok_or(ContentError::Unconfigured(collection))
    }

    /// Published records of `collection` matching `filter`, transformed.
    pub fn try_query<T>(
        &self,
        collection: Collection,
        transform: fn(&Record) -> T,
        filter: Option<Filter>,
    ) -> Result<Vec<T>, ContentError> {
        let collection_id = self.collection_id(collection)?;
        let published = Filter::checkbox(PUBLISHED_FIELD, true);
        let filter = match filter {
            Some(extra) => published.and(extra),
            None => published,
        };

        let records = self.store.query(collection_id, &filter)?;
        debug!("Collection {} returned {} records", collection, records.len());
        Ok(records.iter().map(transform).collect())
    }

    /// [`try_query`](Self::try_query), logging failures and returning an
    /// empty list instead.
    pub fn query<T>(
        &self,
        collection: Collection,
        transform: fn(&Record) -> T,
        filter: Option<Filter>,
    ) -> Vec<T> {
        match self.try_query(collection, transform, filter) {
            Ok(items) => items,
            Err(ContentError::Unconfigured(collection)) => {
                // Always logged at warn level; callers see only the empty list.
                warn!("Collection {} is not configured", collection);
                Vec::new()
            }
            Err(e) => {
                error!("Error querying collection {}: {}", collection, e);
                Vec::new()
            }
        }
    }

    /// First published record of `collection` whose slug equals `slug`.
    ///
    /// An empty slug yields `Ok(None)` without a request.
    pub fn try_get_by_slug<T>(
        &self,
        collection: Collection,
        slug: &str,
        transform: fn(&Record) -> T,
    ) -> Result<Option<T>, ContentError> {
        if slug.is_empty() {
            return Ok(None);
        }
        let collection_id = self.collection_id(collection)?;
        let filter =
            Filter::checkbox(PUBLISHED_FIELD, true).and(Filter::rich_text(SLUG_FIELD, slug));

        let records = self.store.query(collection_id, &filter)?;
        Ok(records.first().map(transform))
    }

    /// [`try_get_by_slug`](Self::try_get_by_slug), logging failures and
    /// returning `None` instead.
    pub fn get_by_slug<T>(
        &self,
        collection: Collection,
        slug: &str,
        transform: fn(&Record) -> T,
    ) -> Option<T> {
        match self.try_get_by_slug(collection, slug, transform) {
            Ok(item) => item,
            Err(ContentError::Unconfigured(_)) => None,
            Err(e) => {
                error!("Error fetching {} by slug {:?}: {}", collection, slug, e);
                None
            }
        }
    }

    /// Fetch a cat record directly by id.
    ///
    /// Not limited to published records.
    pub fn cat_by_id(&self, id: &str) -> Option<Cat> {
        if id.is_empty() {
            return None;
        }
        match self.store.retrieve(id) {
            Ok(record) => Some(transform_cat(&record)),
            Err(e) => {
                error!("Error fetching cat by id {:?}: {}", id, e);
                None
            }
        }
    }

    /// Published cats, by ascending sort order.
    pub fn cats(&self) -> Vec<Cat> {
        let mut cats = self.query(Collection::Cats, transform_cat, None);
        cats.sort_by_key(|cat| cat.sort_order);
        cats
    }

    pub fn cat_by_slug(&self, slug: &str) -> Option<Cat> {
        self.get_by_slug(Collection::Cats, slug, transform_cat)
    }

    /// Published kittens, optionally limited to one status.
    pub fn kittens(&self, status: Option<KittenStatus>) -> Vec<Kitten> {
        let filter = status.map(|status| Filter::select("Status", status.label()));
        self.query(Collection::Kittens, transform_kitten, filter)
    }

    pub fn available_kittens(&self) -> Vec<Kitten> {
        self.kittens(Some(KittenStatus::Available))
    }

    pub fn kitten_by_slug(&self, slug: &str) -> Option<Kitten> {
        self.get_by_slug(Collection::Kittens, slug, transform_kitten)
    }

    pub fn past_kittens(&self) -> Vec<PastKitten> {
        self.query(Collection::PastKittens, transform_past_kitten, None)
    }

    /// Published posts, newest first.
    pub fn blog_posts(&self) -> Vec<BlogPost> {
        newest_first(self.query(Collection::Blog, transform_blog_post, None))
    }

    pub fn blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.get_by_slug(Collection::Blog, slug, transform_blog_post)
    }

    /// Published posts in `category`, newest first.
    pub fn blog_posts_by_category(&self, category: &str) -> Vec<BlogPost> {
        let filter = Filter::select("Category", category);
        newest_first(self.query(Collection::Blog, transform_blog_post, Some(filter)))
    }

    /// Published FAQs, by ascending sort order.
    pub fn faqs(&self) -> Vec<Faq> {
        let mut faqs = self.query(Collection::Faq, transform_faq, None);
        faqs.sort_by_key(|faq| faq.sort_order);
        faqs
    }

    /// Published FAQs in `category`, by ascending sort order.
    pub fn faqs_by_category(&self, category: &str) -> Vec<Faq> {
        let filter = Filter::select("Category", category);
        let mut faqs = self.query(Collection::Faq, transform_faq, Some(filter));
        faqs.sort_by_key(|faq| faq.sort_order);
        faqs
    }

    pub fn pages(&self) -> Vec<Page> {
        self.query(Collection::Pages, transform_page, None)
    }

    pub fn page(&self, slug: &str) -> Option<Page> {
        self.get_by_slug(Collection::Pages, slug, transform_page)
    }
}

/// Stable sort by descending publish date; unparsable dates go last.
fn newest_first(mut posts: Vec<BlogPost>) -> Vec<BlogPost> {
    posts.sort_by_cached_key(|post| {
        let published = parse_timestamp(&post.published_date);
        (published.is_none(), Reverse(published))
    });
    posts
}
