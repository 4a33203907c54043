mod config;
mod db;
mod documents;
mod errors;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::matching::scorer::{KeywordMatchScorer, LlmMatchScorer, MatchScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting GetHired API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;

    let match_scorer = build_match_scorer(&config)?;
    info!("Match scorer backend: {}", match_scorer.backend().as_str());

    let state = AppState {
        db,
        config: config.clone(),
        match_scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Keyword scorer by default; the LLM scorer when enabled and keyed.
fn build_match_scorer(config: &Config) -> Result<Arc<dyn MatchScorer>> {
    if !config.enable_llm_match_scoring {
        return Ok(Arc::new(KeywordMatchScorer));
    }

    let api_key = config
        .anthropic_api_key
        .clone()
        .context("ANTHROPIC_API_KEY is required for LLM match scoring")?;
    let llm = LlmClient::new(api_key);
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    Ok(Arc::new(LlmMatchScorer::new(llm)))
}
