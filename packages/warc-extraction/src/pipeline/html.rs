//! HTML content extraction.
//!
//! `Html::parse_document` is best-effort: malformed markup produces a partial
//! tree rather than an error, so a single bad record can never abort the
//! pass.

use scraper::{Html, Selector};
use tracing::debug;

use crate::types::page::ExtractedPage;

use super::http;

/// Title used when the document has no `title` element.
pub const DEFAULT_TITLE: &str = "No Title";

/// Extract a plain-text page from one response record's payload.
///
/// Produces the empty sentinel when the payload has no parseable HTTP head,
/// no declared content type, a content type other than `text/html`, or no
/// visible text after cleanup. Only `text/html` payloads are ever parsed as
/// markup.
pub fn extract(uri: &str, payload: &[u8]) -> ExtractedPage {
    let Some(http) = http::parse_response(payload) else {
        debug!(uri, "payload has no parseable HTTP head");
        return ExtractedPage::empty(uri);
    };
    let Some(content_type) = http.content_type() else {
        return ExtractedPage::empty(uri);
    };
    if !content_type.contains("text/html") {
        return ExtractedPage::empty(uri);
    }
    let text = http::decode_body(http.body, content_type);
    extract_document(uri, &text)
}

/// Extract title and cleaned text from an HTML document.
pub fn extract_document(uri: &str, html_source: &str) -> ExtractedPage {
    let mut document = Html::parse_document(html_source);
    strip_elements(&mut document, "script, style");

    let content = clean_content(&body_text(&document));
    if content.is_empty() {
        return ExtractedPage::empty(uri);
    }

    let title =
        extract_title(&document).unwrap_or_else(|| DEFAULT_TITLE.to_string());
    ExtractedPage::new(uri, title, content)
}

/// Detach every element matching `css` from the tree, children included.
fn strip_elements(document: &mut Html, css: &str) {
    let Some(selector) = selector(css) else {
        return;
    };
    let ids: Vec<_> = document
        .select(&selector)
        .map(|element| element.id())
        .collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Visible text in document order: the `body` subtree, not the head.
fn body_text(document: &Html) -> String {
    match selector("body").and_then(|s| document.select(&s).next()) {
        Some(body) => body.text().collect(),
        None => document.root_element().text().collect(),
    }
}

/// Text of the first `title` element, if the document has one.
fn extract_title(document: &Html) -> Option<String> {
    let selector = selector("title")?;
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect())
}

/// Trim every line, drop the empty ones, rejoin with single line breaks.
pub fn clean_content(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}
