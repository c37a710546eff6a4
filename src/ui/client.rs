// src/ui/client.rs
use async_trait::async_trait;
use thiserror::Error;

use crate::message::{ChatRequest, ChatResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("relay request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("relay returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("relay reply was not a chat response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The relay's `POST /chat` as seen from the UI.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, ClientError>;
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    url: String,
}

impl RelayClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl ChatApi for RelayClient {
    async fn send(&self, message: &str) -> Result<String, ClientError> {
        let body = ChatRequest { message: message.to_string() };
        let resp = self.client.post(&self.url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        let bytes = resp.bytes().await?;
        let parsed: ChatResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed.response)
    }
}
