//! Rich-text conversion.
//!
//! Spans other than plain text (mentions, equations) produce no output.
//! Span content is emitted as-is; the content store is the trusted author.

use lakeshore_store::{RichText, RichTextKind};

/// Convert rich-text spans to an HTML fragment.
///
/// Each span is wrapped in `strong`, `em`, `u`, `s` and `code` (innermost
/// first) according to its annotations, then in an anchor if it links
/// somewhere. Newlines become `<br>`.
#[must_use]
pub fn rich_text_to_html(spans: &[RichText]) -> String {
    let html: String = spans.iter().map(span_to_html).collect();
    html.replace('\n', "<br>")
}

/// Concatenate the raw text of every text span, dropping all formatting.
#[must_use]
pub fn rich_text_to_plain(spans: &[RichText]) -> String {
    spans
        .iter()
        .filter(|span| span.kind == RichTextKind::Text)
        .filter_map(|span| span.text.as_ref())
        .map(|text| text.content.as_str())
        .collect()
}

fn span_to_html(span: &RichText) -> String {
    if span.kind != RichTextKind::Text {
        return String::new();
    }
    let Some(text) = &span.text else {
        return String::new();
    };

    let annotations = &span.annotations;
    let mut html = text.content.clone();
    if annotations.bold {
        html = format!("<strong>{html}</strong>");
    }
    if annotations.italic {
        html = format!("<em>{html}</em>");
    }
    if annotations.underline {
        html = format!("<u>{html}</u>");
    }
    if annotations.strikethrough {
        html = format!("<s>{html}</s>");
    }
    if annotations.code {
        html = format!("<code>{html}</code>");
    }
    if let Some(link) = &text.link {
        html = format!(r#"<a href="{}">{html}</a>"#, link.url);
    }
    html
}
