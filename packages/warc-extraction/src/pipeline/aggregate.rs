//! Deduplication and corpus assembly.

use std::collections::HashSet;

use crate::types::page::ExtractedPage;

/// Accumulates annotated page blocks in first-seen order.
///
/// One aggregator belongs to exactly one extraction pass; nothing is shared
/// across invocations.
#[derive(Debug, Default)]
pub struct Aggregator {
    seen: HashSet<String>,
    corpus: String,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// URIs that have already contributed content, for the classifier's
    /// pre-check.
    pub fn seen(&self) -> &HashSet<String> {
        &self.seen
    }

    /// Append a page block to the corpus.
    ///
    /// This is the authoritative dedup point: the URI is inserted into the
    /// seen set only here, and only once non-empty content is confirmed.
    /// Returns whether the page was appended.
    pub fn append(&mut self, page: &ExtractedPage) -> bool {
        if page.content.is_empty() {
            return false;
        }
        if !self.seen.insert(page.uri.clone()) {
            return false;
        }
        self.corpus.push_str(&format!(
            "\n\n--- Page: {} ---\nTitle: {}\n\nContent:{}",
            page.uri, page.title, page.content
        ));
        true
    }

    /// The assembled corpus.
    pub fn finish(self) -> String {
        self.corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(uri: &str, title: &str, content: &str) -> ExtractedPage {
        ExtractedPage::new(uri, title, content)
    }

    #[test]
    fn block_format_is_exact() {
        let mut aggregator = Aggregator::new();
        assert!(aggregator.append(&page("https://example.sg/about", "About Us", "Welcome")));
        assert_eq!(
            aggregator.finish(),
            "\n\n--- Page: https://example.sg/about ---\nTitle: About Us\n\nContent:Welcome"
        );
    }

    #[test]
    fn first_page_wins_per_uri() {
        let mut aggregator = Aggregator::new();
        assert!(aggregator.append(&page("https://example.sg/x", "First", "first content")));
        assert!(!aggregator.append(&page("https://example.sg/x", "Second", "second content")));

        let corpus = aggregator.finish();
        assert!(corpus.contains("first content"));
        assert!(!corpus.contains("second content"));
    }

    #[test]
    fn empty_pages_do_not_claim_their_uri() {
        let mut aggregator = Aggregator::new();
        assert!(!aggregator.append(&ExtractedPage::empty("https://example.sg/x")));
        // The URI stays available for a later record that does have content.
        assert!(!aggregator.seen().contains("https://example.sg/x"));
        assert!(aggregator.append(&page("https://example.sg/x", "T", "real content")));
    }

    #[test]
    fn blocks_keep_streaming_order() {
        let mut aggregator = Aggregator::new();
        aggregator.append(&page("https://example.sg/b", "B", "bee"));
        aggregator.append(&page("https://example.sg/a", "A", "ay"));

        let corpus = aggregator.finish();
        let b = corpus.find("https://example.sg/b").unwrap();
        let a = corpus.find("https://example.sg/a").unwrap();
        assert!(b < a);
    }

    #[test]
    fn no_pages_means_empty_corpus() {
        assert_eq!(Aggregator::new().finish(), "");
    }
}
