//! Record to domain object transformers.
//!
//! Transformers are pure and never fail: every unreadable field takes its
//! documented default.

use chrono::{SecondsFormat, Utc};
use lakeshore_store::{Properties, Record};

use crate::format::slugify;
use crate::property::{get_optional, get_property, get_rich_text_html};
use crate::types::{
    BlogPost, Cat, CatStatus, Faq, Gender, Kitten, KittenStatus, Page, ParentLink, PastKitten,
};

/// Author used when a post names none.
pub const DEFAULT_AUTHOR: &str = "Lakeshore Ragdolls";

/// Category used when a post or FAQ has none.
pub const DEFAULT_CATEGORY: &str = "General";

fn text(properties: &Properties, key: &str) -> String {
    get_property(properties, key, String::new())
}

fn list(properties: &Properties, key: &str) -> Vec<String> {
    get_property(properties, key, Vec::new())
}

/// Explicit `Slug` field, or the slug of `title` when it is empty.
fn slug_or(properties: &Properties, title: &str) -> String {
    let slug = text(properties, "Slug");
    if slug.is_empty() { slugify(title) } else { slug }
}

/// First related record id.
fn parent(properties: &Properties, key: &str) -> ParentLink {
    ParentLink::unresolved(list(properties, key).into_iter().next())
}

fn cover(photos: &[String]) -> String {
    photos.first().cloned().unwrap_or_default()
}

pub fn transform_cat(record: &Record) -> Cat {
    let p = &record.properties;
    let name = get_property(p, "Name", "Unnamed Cat".to_owned());
    let photos = list(p, "Photos");

    Cat {
        id: record.id.clone(),
        slug: slug_or(p, &name),
        cover_photo: cover(&photos),
        photos,
        dob: get_optional(p, "Date of Birth"),
        color: text(p, "Color"),
        pattern: text(p, "Pattern"),
        gender: get_property(p, "Gender", Gender::Female),
        status: get_property(p, "Status", CatStatus::Active),
        registration: text(p, "Registration"),
        pedigree: text(p, "Pedigree"),
        health_testing: get_rich_text_html(p, "Health Testing"),
        personality: get_rich_text_html(p, "Personality"),
        youtube_tag: text(p, "YouTube Tag"),
        sort_order: get_property(p, "Sort Order", 0),
        name,
    }
}

/// Parents are left unresolved.
pub fn transform_kitten(record: &Record) -> Kitten {
    let p = &record.properties;
    let name = get_property(p, "Name", "Unnamed Kitten".to_owned());
    let photos = list(p, "Photos");

    Kitten {
        id: record.id.clone(),
        slug: slug_or(p, &name),
        cover_photo: cover(&photos),
        photos,
        dob: get_optional(p, "Date of Birth"),
        color: text(p, "Color"),
        pattern: text(p, "Pattern"),
        gender: get_property(p, "Gender", Gender::Female),
        status: get_property(p, "Status", KittenStatus::Available),
        mother: parent(p, "Mother"),
        father: parent(p, "Father"),
        price: get_optional(p, "Price"),
        reserved_by: get_optional(p, "Reserved By"),
        deposit_paid: get_property(p, "Deposit Paid", false),
        personality: get_rich_text_html(p, "Personality"),
        youtube_tag: text(p, "YouTube Tag"),
        go_home_date: get_optional(p, "Go Home Date"),
        litter: text(p, "Litter"),
        name,
    }
}

/// Parents are left unresolved.
pub fn transform_past_kitten(record: &Record) -> PastKitten {
    let p = &record.properties;
    let photos = list(p, "Photos");

    PastKitten {
        id: record.id.clone(),
        name: get_property(p, "Name", "Unnamed Kitten".to_owned()),
        cover_photo: cover(&photos),
        photos,
        dob: get_optional(p, "Date of Birth"),
        color: text(p, "Color"),
        gender: get_property(p, "Gender", Gender::Female),
        mother: parent(p, "Mother"),
        father: parent(p, "Father"),
        went_home: get_optional(p, "Went Home"),
    }
}

/// A post without a `Published Date` is dated now.
pub fn transform_blog_post(record: &Record) -> BlogPost {
    let p = &record.properties;
    let title = get_property(p, "Title", "Untitled Post".to_owned());

    BlogPost {
        id: record.id.clone(),
        slug: slug_or(p, &title),
        cover_image: cover(&list(p, "Cover Image")),
        content: get_rich_text_html(p, "Content"),
        excerpt: text(p, "Excerpt"),
        category: get_property(p, "Category", DEFAULT_CATEGORY.to_owned()),
        tags: list(p, "Tags"),
        author: get_property(p, "Author", DEFAULT_AUTHOR.to_owned()),
        published_date: get_optional(p, "Published Date")
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        seo_description: get_optional(p, "SEO Description"),
        title,
    }
}

pub fn transform_faq(record: &Record) -> Faq {
    let p = &record.properties;

    Faq {
        id: record.id.clone(),
        question: text(p, "Question"),
        answer: get_rich_text_html(p, "Answer"),
        category: get_property(p, "Category", DEFAULT_CATEGORY.to_owned()),
        sort_order: get_property(p, "Sort Order", 0),
    }
}

pub fn transform_page(record: &Record) -> Page {
    let p = &record.properties;
    let title = get_property(p, "Title", "Untitled".to_owned());

    Page {
        id: record.id.clone(),
        slug: slug_or(p, &title),
        content: get_rich_text_html(p, "Content"),
        seo_description: get_optional(p, "SEO Description"),
        title,
    }
}

#[cfg(test)]
mod tests {
    use lakeshore_store::{FileObject, PropertyValue, RichText};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::format::parse_timestamp;

    fn empty(id: &str) -> Record {
        Record::new(id)
    }

    #[test]
    fn test_cat_full() {
        let record = Record::new("cat-1")
            .with_property("Name", PropertyValue::title("Luna Belle"))
            .with_property(
                "Photos",
                PropertyValue::files(vec![
                    FileObject::hosted("https://files.example/1.jpg"),
                    FileObject::external("https://cdn.example/2.jpg"),
                ]),
            )
            .with_property("Date of Birth", PropertyValue::date("2021-05-04"))
            .with_property("Color", PropertyValue::rich_text("Seal"))
            .with_property("Pattern", PropertyValue::select("Mitted"))
            .with_property("Gender", PropertyValue::select("Female"))
            .with_property("Status", PropertyValue::select("Retired"))
            .with_property("Registration", PropertyValue::rich_text("TICA"))
            .with_property("Pedigree", PropertyValue::url("https://pedigree.example/luna"))
            .with_property(
                "Health Testing",
                PropertyValue::rich_text_spans(vec![RichText::text("HCM ").bold(), RichText::text("clear")]),
            )
            .with_property("Personality", PropertyValue::rich_text("Calm\nCurious"))
            .with_property("YouTube Tag", PropertyValue::rich_text("abc123"))
            .with_property("Sort Order", PropertyValue::number(2.0));

        let cat = transform_cat(&record);

        assert_eq!(
            cat,
            Cat {
                id: "cat-1".to_owned(),
                slug: "luna-belle".to_owned(),
                name: "Luna Belle".to_owned(),
                photos: vec![
                    "https://files.example/1.jpg".to_owned(),
                    "https://cdn.example/2.jpg".to_owned(),
                ],
                cover_photo: "https://files.example/1.jpg".to_owned(),
                dob: Some("2021-05-04".to_owned()),
                color: "Seal".to_owned(),
                pattern: "Mitted".to_owned(),
                gender: Gender::Female,
                status: CatStatus::Retired,
                registration: "TICA".to_owned(),
                pedigree: "https://pedigree.example/luna".to_owned(),
                health_testing: "<strong>HCM </strong>clear".to_owned(),
                personality: "Calm<br>Curious".to_owned(),
                youtube_tag: "abc123".to_owned(),
                sort_order: 2,
            }
        );
    }

    #[test]
    fn test_cat_defaults() {
        let cat = transform_cat(&empty("cat-0"));

        assert_eq!(
            cat,
            Cat {
                id: "cat-0".to_owned(),
                slug: "unnamed-cat".to_owned(),
                name: "Unnamed Cat".to_owned(),
                photos: Vec::new(),
                cover_photo: String::new(),
                dob: None,
                color: String::new(),
                pattern: String::new(),
                gender: Gender::Female,
                status: CatStatus::Active,
                registration: String::new(),
                pedigree: String::new(),
                health_testing: String::new(),
                personality: String::new(),
                youtube_tag: String::new(),
                sort_order: 0,
            }
        );
    }

    #[test]
    fn test_explicit_slug_wins() {
        let record = Record::new("cat-1")
            .with_property("Name", PropertyValue::title("Luna Belle"))
            .with_property("Slug", PropertyValue::rich_text("luna"));
        assert_eq!(transform_cat(&record).slug, "luna");
    }

    #[test]
    fn test_kitten() {
        let record = Record::new("k-1")
            .with_property("Name", PropertyValue::title("Pip"))
            .with_property("Status", PropertyValue::select("Reserved"))
            .with_property("Gender", PropertyValue::select("Male"))
            .with_property("Mother", PropertyValue::relation(&["cat-1", "cat-7"]))
            .with_property("Father", PropertyValue::relation::<&str>(&[]))
            .with_property("Price", PropertyValue::number(2500.0))
            .with_property("Reserved By", PropertyValue::rich_text("The Smiths"))
            .with_property("Deposit Paid", PropertyValue::checkbox(true))
            .with_property("Go Home Date", PropertyValue::date("2024-09-01"))
            .with_property("Litter", PropertyValue::select("Spring 2024"));

        let kitten = transform_kitten(&record);

        assert_eq!(kitten.slug, "pip");
        assert_eq!(kitten.status, KittenStatus::Reserved);
        assert_eq!(kitten.gender, Gender::Male);
        assert_eq!(kitten.mother, ParentLink::unresolved(Some("cat-1".to_owned())));
        assert_eq!(kitten.father, ParentLink::default());
        assert_eq!(kitten.price, Some(2500.0));
        assert_eq!(kitten.reserved_by.as_deref(), Some("The Smiths"));
        assert!(kitten.deposit_paid);
        assert_eq!(kitten.go_home_date.as_deref(), Some("2024-09-01"));
        assert_eq!(kitten.litter, "Spring 2024");
    }

    #[test]
    fn test_kitten_defaults() {
        let kitten = transform_kitten(&empty("k-0"));

        assert_eq!(
            kitten,
            Kitten {
                id: "k-0".to_owned(),
                slug: "unnamed-kitten".to_owned(),
                name: "Unnamed Kitten".to_owned(),
                photos: Vec::new(),
                cover_photo: String::new(),
                dob: None,
                color: String::new(),
                pattern: String::new(),
                gender: Gender::Female,
                status: KittenStatus::Available,
                mother: ParentLink::default(),
                father: ParentLink::default(),
                price: None,
                reserved_by: None,
                deposit_paid: false,
                personality: String::new(),
                youtube_tag: String::new(),
                go_home_date: None,
                litter: String::new(),
            }
        );
    }

    #[test]
    fn test_unknown_status_uses_default() {
        let record = Record::new("k-1").with_property("Status", PropertyValue::select("Pending"));
        assert_eq!(transform_kitten(&record).status, KittenStatus::Available);
    }

    #[test]
    fn test_past_kitten_defaults() {
        let past = transform_past_kitten(&empty("p-0"));

        assert_eq!(
            past,
            PastKitten {
                id: "p-0".to_owned(),
                name: "Unnamed Kitten".to_owned(),
                photos: Vec::new(),
                cover_photo: String::new(),
                dob: None,
                color: String::new(),
                gender: Gender::Female,
                mother: ParentLink::default(),
                father: ParentLink::default(),
                went_home: None,
            }
        );
    }

    #[test]
    fn test_past_kitten_parents_unresolved() {
        let record = Record::new("p-1")
            .with_property("Mother", PropertyValue::relation(&["cat-1"]))
            .with_property("Father", PropertyValue::relation(&["cat-2"]))
            .with_property("Went Home", PropertyValue::date("2023-03-01"));

        let past = transform_past_kitten(&record);

        assert_eq!(past.mother.id.as_deref(), Some("cat-1"));
        assert!(past.mother.cat.is_none());
        assert_eq!(past.father.id.as_deref(), Some("cat-2"));
        assert!(past.father.cat.is_none());
        assert_eq!(past.went_home.as_deref(), Some("2023-03-01"));
    }

    #[test]
    fn test_blog_post() {
        let record = Record::new("post-1")
            .with_property("Title", PropertyValue::title("Bringing Kitten Home"))
            .with_property(
                "Cover Image",
                PropertyValue::files(vec![FileObject::external("https://cdn.example/cover.jpg")]),
            )
            .with_property("Content", PropertyValue::rich_text("Day one."))
            .with_property("Excerpt", PropertyValue::rich_text("Tips"))
            .with_property("Category", PropertyValue::select("Care"))
            .with_property("Tags", PropertyValue::multi_select(&["kittens", "home"]))
            .with_property("Published Date", PropertyValue::date("2024-02-01"))
            .with_property("SEO Description", PropertyValue::rich_text("How to prepare"));

        let post = transform_blog_post(&record);

        assert_eq!(
            post,
            BlogPost {
                id: "post-1".to_owned(),
                slug: "bringing-kitten-home".to_owned(),
                title: "Bringing Kitten Home".to_owned(),
                cover_image: "https://cdn.example/cover.jpg".to_owned(),
                content: "Day one.".to_owned(),
                excerpt: "Tips".to_owned(),
                category: "Care".to_owned(),
                tags: vec!["kittens".to_owned(), "home".to_owned()],
                author: "Lakeshore Ragdolls".to_owned(),
                published_date: "2024-02-01".to_owned(),
                seo_description: Some("How to prepare".to_owned()),
            }
        );
    }

    #[test]
    fn test_blog_post_defaults() {
        let post = transform_blog_post(&empty("post-0"));

        assert_eq!(post.title, "Untitled Post");
        assert_eq!(post.slug, "untitled-post");
        assert_eq!(post.cover_image, "");
        assert_eq!(post.content, "");
        assert_eq!(post.category, "General");
        assert!(post.tags.is_empty());
        assert_eq!(post.author, "Lakeshore Ragdolls");
        assert!(parse_timestamp(&post.published_date).is_some());
        assert_eq!(post.seo_description, None);
    }

    #[test]
    fn test_faq() {
        let record = Record::new("faq-1")
            .with_property("Question", PropertyValue::title("Do you ship?"))
            .with_property(
                "Answer",
                PropertyValue::rich_text_spans(vec![RichText::text("No").bold(), RichText::text(", pickup only.")]),
            )
            .with_property("Sort Order", PropertyValue::number(4.0));

        assert_eq!(
            transform_faq(&record),
            Faq {
                id: "faq-1".to_owned(),
                question: "Do you ship?".to_owned(),
                answer: "<strong>No</strong>, pickup only.".to_owned(),
                category: "General".to_owned(),
                sort_order: 4,
            }
        );
    }

    #[test]
    fn test_page_defaults() {
        assert_eq!(
            transform_page(&empty("page-0")),
            Page {
                id: "page-0".to_owned(),
                slug: "untitled".to_owned(),
                title: "Untitled".to_owned(),
                content: String::new(),
                seo_description: None,
            }
        );
    }
}
