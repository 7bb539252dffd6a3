//! Summarizer implementations.

pub mod openai;

pub use openai::{OpenAISummarizer, DEFAULT_MODEL};
