// src/services/search.rs
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

/// Field of each document the user message is matched against.
pub const QUESTION_FIELD: &str = "question";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Answer stored alongside the best matching question.
    Match(String),
    NoMatch,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search index returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("top hit has no answer field")]
    MissingAnswer,
}

/// Lookup of predefined answers by question text.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    async fn best_answer(&self, message: &str) -> Result<SearchOutcome, SearchError>;
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: Hits,
}

#[derive(Deserialize)]
struct Hits {
    hits: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: HitSource,
}

#[derive(Deserialize)]
struct HitSource {
    #[serde(default)]
    answer: serde_json::Value,
}

impl HitSource {
    /// Non-string answers are returned in their JSON text form.
    fn into_answer(self) -> Option<String> {
        match self.answer {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

/// Elasticsearch index queried through its REST `_search` API.
#[derive(Debug, Clone)]
pub struct ElasticsearchIndex {
    client: reqwest::Client,
    base_url: String,
    index: String,
}

impl ElasticsearchIndex {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            index: index.into(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/{}/_search", self.base_url.trim_end_matches('/'), self.index)
    }
}

#[async_trait]
impl SearchIndex for ElasticsearchIndex {
    async fn best_answer(&self, message: &str) -> Result<SearchOutcome, SearchError> {
        let body = json!({
            "query": { "match": { QUESTION_FIELD: message } }
        });

        let resp = self.client.post(self.search_url()).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let parsed: SearchResponse = resp.json().await?;
        match parsed.hits.hits.into_iter().next() {
            Some(hit) => hit
                .source
                .into_answer()
                .map(SearchOutcome::Match)
                .ok_or(SearchError::MissingAnswer),
            None => Ok(SearchOutcome::NoMatch),
        }
    }
}
