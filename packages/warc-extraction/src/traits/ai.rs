//! Summarizer trait for the external text-generation collaborator.

use async_trait::async_trait;

use crate::error::SummarizeResult;

/// The summarization collaborator.
///
/// Implementations wrap a specific LLM provider and handle the specifics of
/// prompting and response validation. The collaborator is stateless per
/// call, so one instance is safely shared across requests.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce the structured summary for one assembled corpus.
    ///
    /// The corpus may be empty (an archive with no qualifying records); it is
    /// still sent. The returned JSON value is passed through to the caller
    /// verbatim; the pipeline does not validate its shape.
    async fn summarize(&self, corpus: &str) -> SummarizeResult<serde_json::Value>;
}
