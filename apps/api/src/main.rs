mod config;
mod db;
mod enrich;
mod errors;
mod extract;
mod feedback;
mod llm_client;
mod matching;
mod routes;
mod sources;
mod state;
mod text;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::feedback::store::FeedbackStore;
use crate::llm_client::LlmClient;
use crate::matching::scorer::{SemanticScorer, EMBEDDING_MODEL_NAME};
use crate::routes::build_router;
use crate::state::AppState;

/// Timeout for job-source fetches (the LLM client builds its own, longer one).
const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobHunt API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite + feedback log schema
    let pool = create_pool(&config.database_url).await?;
    init_schema(&pool).await?;

    // Load the embedding model once; every pipeline invocation shares it.
    // No fallback scorer exists, so failure here aborts startup.
    let scorer = tokio::task::spawn_blocking(SemanticScorer::new).await??;
    let scorer = Arc::new(scorer);
    info!("Embedding model loaded ({EMBEDDING_MODEL_NAME})");

    // Shared HTTP client for job-source fetchers
    let http = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    // LLM client only when a credential is configured; the enrichment
    // endpoint reports its absence per request.
    let llm = config.anthropic_api_key.clone().map(LlmClient::new);
    match &llm {
        Some(_) => info!("LLM client initialized (model: {})", llm_client::MODEL),
        None => info!("ANTHROPIC_API_KEY not set; enrichment endpoint disabled"),
    }

    // Build app state
    let state = AppState {
        http,
        scorer,
        feedback: FeedbackStore::new(pool),
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
