// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::inference::LmStudioClient;
use crate::services::relay::Relay;
use crate::services::search::ElasticsearchIndex;

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub relay: Relay,
}

impl AppState {
    pub fn new(relay: Relay) -> Self {
        Self { relay }
    }

    /// Wire the Elasticsearch and LM Studio adapters over one shared HTTP client.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        let search = ElasticsearchIndex::new(http.clone(), &config.search_url, &config.search_index);
        let inference = LmStudioClient::new(http, &config.lm_studio_url);
        Ok(Self::new(Relay::new(Arc::new(search), Arc::new(inference))))
    }
}
