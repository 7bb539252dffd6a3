//! Testing utilities: a mock summarizer and WARC fixture builders.
//!
//! These are useful for testing applications that use the extraction
//! pipeline without making real LLM calls or shipping archive files around.

use std::io::Write;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{SummarizeError, SummarizeResult};
use crate::traits::Summarizer;

/// How a [`MockSummarizer`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// The collaborator call itself fails
    Unavailable,
    /// The collaborator replies with non-JSON content
    InvalidResponse,
}

/// A mock summarizer for testing.
///
/// Returns a configurable JSON value (or failure) and records every corpus
/// it receives, so tests can assert on what the pipeline sent.
#[derive(Clone)]
pub struct MockSummarizer {
    response: serde_json::Value,
    failure: Option<MockFailure>,
    corpora: Arc<RwLock<Vec<String>>>,
}

impl Default for MockSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSummarizer {
    /// Create a mock that returns a fixed, well-formed summary.
    pub fn new() -> Self {
        Self {
            response: serde_json::json!({
                "title": "Mock Site",
                "categories": ["Community"],
                "abstract": "A mock abstract.",
            }),
            failure: None,
            corpora: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set the value returned from every call.
    pub fn with_response(mut self, response: serde_json::Value) -> Self {
        self.response = response;
        self
    }

    /// Make every call fail the given way.
    pub fn with_failure(mut self, failure: MockFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Every corpus received so far, in call order.
    pub fn corpora(&self) -> Vec<String> {
        self.corpora.read().unwrap().clone()
    }

    /// The most recently received corpus.
    pub fn last_corpus(&self) -> Option<String> {
        self.corpora.read().unwrap().last().cloned()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, corpus: &str) -> SummarizeResult<serde_json::Value> {
        self.corpora.write().unwrap().push(corpus.to_string());
        match self.failure {
            Some(MockFailure::Unavailable) => {
                Err(SummarizeError::Unavailable("mock outage".into()))
            }
            Some(MockFailure::InvalidResponse) => Err(SummarizeError::InvalidResponse(
                "not valid JSON: mock".into(),
            )),
            None => Ok(self.response.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// WARC fixture builders
// ---------------------------------------------------------------------------

/// Build one WARC record with the given type, optional target URI and
/// payload bytes. Mandatory WARC headers are always present.
pub fn warc_record(warc_type: &str, target: Option<&str>, payload: &[u8]) -> Vec<u8> {
    let mut head = String::from("WARC/1.0\r\n");
    head.push_str(&format!("WARC-Type: {warc_type}\r\n"));
    head.push_str("WARC-Record-ID: <urn:uuid:1b1a61c0-4d5b-41f7-9085-158622c47f19>\r\n");
    head.push_str("WARC-Date: 2024-01-05T08:00:00Z\r\n");
    if let Some(target) = target {
        head.push_str(&format!("WARC-Target-URI: {target}\r\n"));
    }
    head.push_str(&format!("Content-Type: application/http; msgtype={warc_type}\r\n"));
    head.push_str(&format!("Content-Length: {}\r\n\r\n", payload.len()));

    let mut record = head.into_bytes();
    record.extend_from_slice(payload);
    record.extend_from_slice(b"\r\n\r\n");
    record
}

/// Build a captured HTTP response payload.
pub fn http_response(content_type: &str, body: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\n\r\n{body}",
        body.len()
    )
    .into_bytes()
}

/// Build a response record for `uri` carrying an HTML body.
pub fn response_record(uri: &str, content_type: &str, body: &str) -> Vec<u8> {
    warc_record("response", Some(uri), &http_response(content_type, body))
}

/// Build a request record (always skipped by the classifier).
pub fn request_record(uri: &str) -> Vec<u8> {
    warc_record(
        "request",
        Some(uri),
        b"GET / HTTP/1.1\r\nHost: example.sg\r\n\r\n",
    )
}

/// Concatenate records into one archive.
pub fn archive(records: &[Vec<u8>]) -> Vec<u8> {
    records.concat()
}

/// Gzip-compress bytes (one member), as uploaded `.gz` captures are.
pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}
