//! Record eligibility checks.
//!
//! Runs before any payload decode so ineligible records cost nothing beyond
//! their header parse. The URI heuristics are deliberately coarse substring
//! checks on the raw identifier; they are case-sensitive and will reject
//! unrelated path segments that happen to contain an indicator.

use std::collections::HashSet;
use std::fmt;

use warc::RecordType;

/// Substrings that mark a target URI as non-content.
pub const NON_CONTENT_INDICATORS: [&str; 8] = [
    "admin", "login", "error", "404", "401", "403", "ajax", "index",
];

/// Why a record was skipped without extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not a response record (request, metadata, anything else)
    NotResponse,
    /// No target URI, or an empty one
    MissingTarget,
    /// The URI already contributed to the corpus
    AlreadySeen,
    /// The URI matched a non-content heuristic
    NonContentTarget,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::NotResponse => "not a response record",
            Rejection::MissingTarget => "missing target URI",
            Rejection::AlreadySeen => "target URI already aggregated",
            Rejection::NonContentTarget => "non-content target URI",
        };
        f.write_str(reason)
    }
}

/// Decide whether a record is eligible for extraction.
///
/// Returns the owned target URI on success. The seen-set check here is a
/// pre-check that saves the payload decode; the authoritative check happens
/// again at append time.
pub fn classify(
    record_type: &RecordType,
    target: Option<&str>,
    seen: &HashSet<String>,
) -> Result<String, Rejection> {
    if !matches!(record_type, RecordType::Response) {
        return Err(Rejection::NotResponse);
    }
    let uri = match target {
        Some(uri) if !uri.is_empty() => uri,
        _ => return Err(Rejection::MissingTarget),
    };
    if seen.contains(uri) {
        return Err(Rejection::AlreadySeen);
    }
    if is_non_content_uri(uri) {
        return Err(Rejection::NonContentTarget);
    }
    Ok(uri.to_string())
}

/// The non-content URI heuristic: indicator substrings, or a final path
/// segment containing a `.` (read as "file resource, not a page").
pub fn is_non_content_uri(uri: &str) -> bool {
    let is_file = uri
        .rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'));
    NON_CONTENT_INDICATORS
        .iter()
        .any(|indicator| uri.contains(indicator))
        || is_file
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_seen() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn accepts_plain_page_uri() {
        let uri = classify(
            &RecordType::Response,
            Some("https://example.sg/about"),
            &no_seen(),
        )
        .unwrap();
        assert_eq!(uri, "https://example.sg/about");
    }

    #[test]
    fn rejects_non_response_records() {
        assert_eq!(
            classify(
                &RecordType::Request,
                Some("https://example.sg/about"),
                &no_seen()
            ),
            Err(Rejection::NotResponse)
        );
        assert_eq!(
            classify(
                &RecordType::Metadata,
                Some("https://example.sg/about"),
                &no_seen()
            ),
            Err(Rejection::NotResponse)
        );
    }

    #[test]
    fn rejects_missing_or_empty_target() {
        assert_eq!(
            classify(&RecordType::Response, None, &no_seen()),
            Err(Rejection::MissingTarget)
        );
        assert_eq!(
            classify(&RecordType::Response, Some(""), &no_seen()),
            Err(Rejection::MissingTarget)
        );
    }

    #[test]
    fn rejects_already_seen_target() {
        let mut seen = HashSet::new();
        seen.insert("https://example.sg/about".to_string());
        assert_eq!(
            classify(&RecordType::Response, Some("https://example.sg/about"), &seen),
            Err(Rejection::AlreadySeen)
        );
    }

    #[test]
    fn rejects_indicator_substrings_anywhere() {
        for uri in [
            "https://example.sg/admin/about",
            "https://example.sg/login",
            "https://example.sg/pages/error",
            "https://example.sg/404",
            "https://example.sg/site-index",
            "https://example.sg/ajax/feed",
        ] {
            assert!(is_non_content_uri(uri), "{uri} should be rejected");
        }
    }

    #[test]
    fn indicator_match_is_case_sensitive() {
        assert!(!is_non_content_uri("https://example.sg/Admin/about"));
        assert!(!is_non_content_uri("https://example.sg/LOGIN"));
    }

    #[test]
    fn rejects_file_like_final_segment() {
        assert!(is_non_content_uri("https://example.sg/assets/logo.png"));
        assert!(is_non_content_uri("https://example.sg/report.pdf"));
        // A bare origin ends in the hostname, which contains a dot.
        assert!(is_non_content_uri("https://example.sg"));
    }

    #[test]
    fn dot_in_earlier_segment_is_fine() {
        assert!(!is_non_content_uri("https://example.sg/v1.2/pages"));
        assert!(!is_non_content_uri("https://example.sg/"));
    }
}
