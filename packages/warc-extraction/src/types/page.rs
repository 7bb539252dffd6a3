//! Extracted page values.

use serde::{Deserialize, Serialize};

/// Plain-text content extracted from one archived response record.
///
/// The empty-string sentinel means "no usable content": a page either carries
/// extracted text or both text fields are empty, and empty pages contribute
/// nothing to the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// The URI the response was captured from
    pub uri: String,

    /// Page title, or `"No Title"` when the document has no `title` element
    pub title: String,

    /// Newline-normalized visible text
    pub content: String,
}

impl ExtractedPage {
    /// Create a page carrying extracted text.
    pub fn new(
        uri: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// The "no usable content" sentinel for a record.
    pub fn empty(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: String::new(),
            content: String::new(),
        }
    }

    /// Whether this page carries no usable content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sentinel_has_no_text() {
        let page = ExtractedPage::empty("https://example.sg/about");
        assert!(page.is_empty());
        assert_eq!(page.uri, "https://example.sg/about");
        assert_eq!(page.title, "");
        assert_eq!(page.content, "");
    }

    #[test]
    fn page_with_content_is_not_empty() {
        let page = ExtractedPage::new("https://example.sg/about", "About Us", "Welcome");
        assert!(!page.is_empty());
    }
}
