use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the relay listens on
    pub bind_addr: String,
    /// Base URL of the Elasticsearch node
    pub search_url: String,
    /// Index holding the question/answer documents
    pub search_index: String,
    /// Full URL of the chat completions endpoint
    pub lm_studio_url: String,
    /// Directory served as the browser UI
    pub public_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            search_url: "http://localhost:9200".to_string(),
            search_index: "chatbot".to_string(),
            lm_studio_url: "http://localhost:1234/v1/chat/completions".to_string(),
            public_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Defaults overridden by whatever is set in the environment (or `.env`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by any variable `lookup` resolves.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(url) = lookup("SEARCH_URL") {
            config.search_url = url;
        }
        if let Some(index) = lookup("SEARCH_INDEX") {
            config.search_index = index;
        }
        if let Some(url) = lookup("LM_STUDIO_URL") {
            config.lm_studio_url = url;
        }
        if let Some(dir) = lookup("PUBLIC_DIR") {
            config.public_dir = PathBuf::from(dir);
        }

        config
    }
}
