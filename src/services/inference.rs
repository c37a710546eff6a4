// src/services/inference.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MODEL: &str = "dolphin3.0-llama3.1-8b";
pub const TEMPERATURE: f64 = 0.7;
/// LM Studio reads a negative limit as "no limit".
pub const MAX_TOKENS: i64 = -1;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("inference request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("inference endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("inference response had no choices")]
    NoChoices,
}

/// A language model that answers a single user message.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn complete(&self, message: &str) -> Result<String, InferenceError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    temperature: f64,
    max_tokens: i64,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// OpenAI-style chat completions client pointed at a local LM Studio server.
#[derive(Debug, Clone)]
pub struct LmStudioClient {
    client: reqwest::Client,
    url: String,
}

impl LmStudioClient {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl InferenceBackend for LmStudioClient {
    async fn complete(&self, message: &str) -> Result<String, InferenceError> {
        let body = CompletionRequest {
            model: MODEL,
            messages: vec![RequestMessage { role: "user", content: message }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        };

        let resp = self.client.post(&self.url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(InferenceError::Status(status));
        }

        let parsed: CompletionResponse = resp.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(InferenceError::NoChoices)
    }
}
