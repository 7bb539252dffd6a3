//! Streaming WARC-to-text extraction
//!
//! Turns a web-archive capture into one deduplicated, annotated plain-text
//! corpus, ready for summarization.
//!
//! # Pipeline
//!
//! Records stream out of the container one at a time and flow through:
//!
//! - classification (response records only, URI heuristics, dedup pre-check)
//! - HTML extraction (HTTP head parse, `text/html` only, script/style
//!   removal, text + title)
//! - the meaningfulness filter (boilerplate and error pages contribute
//!   nothing)
//! - aggregation (first-seen order, one block per URI)
//!
//! # Usage
//!
//! ```rust,ignore
//! use warc_extraction::ai::OpenAISummarizer;
//! use warc_extraction::pipeline::{extract_corpus, reader};
//!
//! let input = reader::decompress(std::io::BufReader::new(file))?;
//! let corpus = extract_corpus(input)?;
//!
//! let summarizer = OpenAISummarizer::from_env()?;
//! let summary = summarizer.summarize(&corpus).await?;
//! ```
//!
//! # Modules
//!
//! - [`pipeline`] - the extraction pass and its stages
//! - [`traits`] - the `Summarizer` seam to the LLM collaborator
//! - [`types`] - extracted values
//! - [`testing`] - mock summarizer and WARC fixture builders

pub mod error;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "openai")]
pub mod ai;

// Re-export core types at crate root
pub use error::{ExtractionError, Result, SummarizeError, SummarizeResult};
pub use pipeline::{extract_corpus, Aggregator, Rejection};
pub use traits::Summarizer;
pub use types::ExtractedPage;

#[cfg(feature = "openai")]
pub use ai::OpenAISummarizer;
