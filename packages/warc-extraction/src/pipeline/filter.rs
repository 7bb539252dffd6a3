//! Meaningfulness filter.
//!
//! Heuristic rejection of boilerplate and error pages after extraction,
//! before aggregation. Both checks lowercase their input first, unlike the
//! URI heuristics in `classify`, which match the raw identifier. The
//! indicator lists are fixed product choices; `"401,"` really does carry a
//! trailing comma.

use tracing::debug;

use crate::types::page::ExtractedPage;

/// Lowercased substrings that mark extracted content as non-meaningful.
pub const NON_MEANINGFUL_CONTENT: [&str; 10] = [
    "404",
    "401,",
    "403",
    "lorem",
    "blockquote",
    "class=",
    "href",
    "not found",
    "can't be found",
    "nothing was found",
];

/// Lowercased substrings that mark a title as non-meaningful.
pub const NON_MEANINGFUL_TITLES: [&str; 7] =
    ["index of", "404", "401", "400", "403", "304", "301"];

/// Whether an extracted title/content pair should reach the corpus.
pub fn is_meaningful(title: &str, content: &str) -> bool {
    !is_non_meaningful_content(content) && !is_non_meaningful_title(title)
}

/// Apply the filter: a rejected page becomes the empty sentinel, so the
/// record contributes nothing but the pass continues.
pub fn apply(page: ExtractedPage) -> ExtractedPage {
    if page.is_empty() || is_meaningful(&page.title, &page.content) {
        page
    } else {
        debug!(uri = %page.uri, "rejected by meaningfulness filter");
        ExtractedPage::empty(page.uri)
    }
}

fn is_non_meaningful_content(content: &str) -> bool {
    let lowered = content.to_lowercase();
    NON_MEANINGFUL_CONTENT
        .iter()
        .any(|indicator| lowered.contains(indicator))
}

fn is_non_meaningful_title(title: &str) -> bool {
    let lowered = title.to_lowercase();
    NON_MEANINGFUL_TITLES
        .iter()
        .any(|indicator| lowered.contains(indicator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_pages() {
        assert!(is_meaningful("About Us", "Welcome to our site"));
        assert!(is_meaningful("No Title", "Some real paragraph of text"));
    }

    #[test]
    fn rejects_error_page_content() {
        assert!(!is_meaningful("About", "The page you requested was Not Found"));
        assert!(!is_meaningful("About", "HTTP 404 - missing"));
        assert!(!is_meaningful("About", "Sorry, this page can't be found."));
        assert!(!is_meaningful("About", "Nothing was found at this address"));
    }

    #[test]
    fn rejects_markup_leakage_in_content() {
        assert!(!is_meaningful("About", "some text class=\"nav\" more"));
        assert!(!is_meaningful("About", "see href for details"));
        assert!(!is_meaningful("About", "Lorem ipsum dolor sit amet"));
        assert!(!is_meaningful("About", "a blockquote appeared"));
    }

    #[test]
    fn content_401_requires_trailing_comma() {
        assert!(is_meaningful("About", "room 401 is upstairs"));
        assert!(!is_meaningful("About", "error 401, unauthorized"));
    }

    #[test]
    fn rejects_status_code_titles() {
        for title in ["404 Not So Fast", "Index of /files", "Error 400", "301 Moved"] {
            assert!(!is_meaningful(title, "perfectly fine content"), "{title}");
        }
    }

    #[test]
    fn checks_are_case_insensitive() {
        assert!(!is_meaningful("INDEX OF /", "content"));
        assert!(!is_meaningful("Title", "PAGE NOT FOUND"));
    }

    #[test]
    fn apply_clears_rejected_pages() {
        let page = ExtractedPage::new("https://example.sg/x", "404", "content");
        let filtered = apply(page);
        assert!(filtered.is_empty());
        assert_eq!(filtered.uri, "https://example.sg/x");
    }

    #[test]
    fn apply_passes_meaningful_pages_through() {
        let page = ExtractedPage::new("https://example.sg/x", "About", "content");
        assert_eq!(apply(page.clone()), page);
    }

    #[test]
    fn apply_leaves_empty_sentinel_alone() {
        let page = ExtractedPage::empty("https://example.sg/x");
        assert!(apply(page).is_empty());
    }
}
