mod app;
mod cache;
mod category;
mod config;
mod error;
mod handlers;
mod metrics;
mod models;
mod ollama;
mod prompts;
mod state;

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use crate::cache::{ResponseCache, SystemClock};
use crate::config::Args;
use crate::ollama::OllamaClient;
use crate::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // parse cli arguments
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let backend = OllamaClient::new(reqwest::Client::new(), args.upstream_url())
        .with_timeouts(args.timeouts());
    let cache = ResponseCache::new(args.ttl(), Arc::new(SystemClock));

    tracing::info!(ollama_url = %backend.base_url(), "Forwarding to Ollama");

    // creating shared state
    let state = Arc::new(AppState::new(Arc::new(backend), cache));
    let app = app::build_router(state);

    let addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        addr = %addr,
        cache_ttl_secs = args.cache_ttl,
        "Title fixer backend running"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
