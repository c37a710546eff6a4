use std::sync::Arc;

use axum::Router;
use tracing_subscriber::EnvFilter;

use chat_relay::config::Config;
use chat_relay::routes;
use chat_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("search index: {}/{}", config.search_url, config.search_index);
    tracing::info!("inference endpoint: {}", config.lm_studio_url);

    let state = Arc::new(AppState::from_config(&config)?);

    let app: Router = routes::create_router(&config.public_dir)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("chat relay running at http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
