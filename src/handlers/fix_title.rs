use axum::{Json, extract::State};
use std::sync::Arc;
use std::time::Instant;
use crate::cache::{CachedResponse, title_key};
use crate::error::AppError;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, CACHE_SIZE, REQUEST_TOTAL, UPSTREAM_LATENCY};
use crate::models::{GenerateOptions, TitleRequest, TitleResponse};
use crate::prompts::build_factual_prompt;
use crate::state::AppState;

const FACTUAL_OPTIONS: GenerateOptions = GenerateOptions {
    temperature: 0.1,
    num_predict: Some(100),
};

// The model is told not to quote, but often does anyway
fn strip_quotes(text: &str) -> String {
    text.trim().replace(['"', '\''], "")
}

pub async fn fix_title_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TitleRequest>,
) -> Result<Json<TitleResponse>, AppError> {
    REQUEST_TOTAL.inc();

    let title = payload.title.trim().to_string();
    let model = payload.model;
    let cache_key = title_key(&title, &model);

    // check cache first
    if let Some(CachedResponse::Title(cached)) = state.cache.fresh(&cache_key) {
        CACHE_HITS.inc();
        tracing::debug!(key = %cache_key, "Cache HIT");
        return Ok(Json(cached));
    }
    CACHE_MISSES.inc();
    tracing::debug!(key = %cache_key, "Cache MISS - calling Ollama");

    let start_time = Instant::now();
    let raw = state
        .backend
        .generate(&model, &build_factual_prompt(&title), FACTUAL_OPTIONS)
        .await?;
    let processing_time = start_time.elapsed().as_secs_f64();
    UPSTREAM_LATENCY.observe(processing_time);

    let response = TitleResponse {
        original: title,
        factual: strip_quotes(&raw),
        processing_time,
    };

    // saving to cache
    state
        .cache
        .put(cache_key, CachedResponse::Title(response.clone()));
    CACHE_SIZE.set(state.cache.len() as f64);

    tracing::info!(
        model = %model,
        original = %response.original,
        factual = %response.factual,
        elapsed = processing_time,
        "Fixed title"
    );
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_quote_character() {
        assert_eq!(strip_quotes("  \"Cats' nap\" schedule \n"), "Cats nap schedule");
        assert_eq!(strip_quotes("Plain title"), "Plain title");
    }
}
