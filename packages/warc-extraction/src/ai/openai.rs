//! OpenAI implementation of the `Summarizer` trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use warc_extraction::ai::OpenAISummarizer;
//!
//! let summarizer = OpenAISummarizer::from_env()?;
//! let result = summarizer.summarize(&corpus).await?;
//! ```

use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};

use crate::error::{SummarizeError, SummarizeResult};
use crate::pipeline::prompts::{EXAMPLES, SYSTEM_PROMPT};
use crate::traits::Summarizer;

/// Default chat model for summarization.
pub const DEFAULT_MODEL: &str = "gpt-4-1106-preview";

/// Determinism seed sent with every summarization request.
const SUMMARY_SEED: u64 = 11;

/// OpenAI-backed summarizer.
#[derive(Clone)]
pub struct OpenAISummarizer {
    client: OpenAIClient,
    model: String,
}

impl OpenAISummarizer {
    /// Create a summarizer over an existing client.
    pub fn new(client: OpenAIClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> SummarizeResult<Self> {
        let client = OpenAIClient::from_env()
            .map_err(|e| SummarizeError::Config(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Set the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl Summarizer for OpenAISummarizer {
    async fn summarize(&self, corpus: &str) -> SummarizeResult<serde_json::Value> {
        let request = ChatRequest::new(self.model.as_str())
            .messages(build_messages(corpus))
            .temperature(0.0)
            .seed(SUMMARY_SEED)
            .json_response();

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| match e {
                OpenAIError::Config(msg) => SummarizeError::Config(msg),
                OpenAIError::Parse(msg) => SummarizeError::InvalidResponse(msg),
                OpenAIError::Network(msg) | OpenAIError::Api(msg) => {
                    SummarizeError::Unavailable(msg)
                }
            })?;

        parse_summary(&response.content)
    }
}

/// Assemble the message sequence: system instruction, few-shot pairs, the
/// system instruction once more, then the corpus as the final user turn.
pub fn build_messages(corpus: &str) -> Vec<Message> {
    let mut messages = vec![Message::system(SYSTEM_PROMPT)];
    for example in &EXAMPLES {
        messages.push(Message::user(example.user));
        messages.push(Message::assistant(example.assistant));
    }
    messages.push(Message::system(SYSTEM_PROMPT));
    messages.push(Message::user(corpus));
    messages
}

/// Validate that the collaborator's reply is JSON and pass it through.
pub fn parse_summary(content: &str) -> SummarizeResult<serde_json::Value> {
    serde_json::from_str(content)
        .map_err(|e| SummarizeError::InvalidResponse(format!("not valid JSON: {e}")))
}
