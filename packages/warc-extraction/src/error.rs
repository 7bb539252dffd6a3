//! Typed errors for the extraction pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that abort an extraction pass.
///
/// Per-record anomalies (unparseable HTTP heads, hopeless markup, filtered
/// pages) are absorbed inside the pass and never surface here; only
/// container-level failures do.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The byte stream is not a valid archive container
    #[error("malformed archive: {0}")]
    MalformedArchive(#[from] warc::Error),

    /// Reading the underlying stream failed
    #[error("archive read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the summarization collaborator.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Client-side configuration problem (missing API key, bad settings)
    #[error("summarizer configuration error: {0}")]
    Config(String),

    /// The collaborator call itself failed (network, auth, rate limit)
    #[error("summarization service unavailable: {0}")]
    Unavailable(String),

    /// The collaborator returned no content or content that is not JSON
    #[error("summarizer returned invalid content: {0}")]
    InvalidResponse(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for summarization operations.
pub type SummarizeResult<T> = std::result::Result<T, SummarizeError>;
