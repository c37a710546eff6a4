// src/services/relay.rs
use std::fmt;
use std::sync::Arc;

use super::inference::{InferenceBackend, InferenceError};
use super::search::{SearchIndex, SearchOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Index,
    Model,
}

impl fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerSource::Index => f.write_str("index"),
            AnswerSource::Model => f.write_str("model"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
}

/// Answers a message from the search index, falling back to the model.
#[derive(Clone)]
pub struct Relay {
    search: Arc<dyn SearchIndex>,
    inference: Arc<dyn InferenceBackend>,
}

impl fmt::Debug for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relay").finish_non_exhaustive()
    }
}

impl Relay {
    pub fn new(search: Arc<dyn SearchIndex>, inference: Arc<dyn InferenceBackend>) -> Self {
        Self { search, inference }
    }

    /// Search first; the model is only asked once the search has finished,
    /// whether it missed or failed.
    pub async fn answer(&self, message: &str) -> Result<Answer, InferenceError> {
        match self.search.best_answer(message).await {
            Ok(SearchOutcome::Match(text)) => {
                tracing::info!(source = %AnswerSource::Index, "answered from search index");
                return Ok(Answer { text, source: AnswerSource::Index });
            }
            Ok(SearchOutcome::NoMatch) => {
                tracing::debug!("no indexed question matched, asking the model");
            }
            Err(e) => {
                tracing::warn!(error = %e, "search failed, asking the model");
            }
        }

        match self.inference.complete(message).await {
            Ok(text) => {
                tracing::info!(source = %AnswerSource::Model, "answered from model");
                Ok(Answer { text, source: AnswerSource::Model })
            }
            Err(e) => {
                tracing::error!(error = %e, "inference failed");
                Err(e)
            }
        }
    }
}
