use axum::{Json, extract::State};
use std::sync::Arc;
use std::time::Instant;
use crate::cache::{CachedResponse, category_key};
use crate::category;
use crate::error::AppError;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, CACHE_SIZE, REQUEST_TOTAL, UPSTREAM_LATENCY};
use crate::models::{CategoryRequest, CategoryResponse, GenerateOptions};
use crate::prompts::build_classification_prompt;
use crate::state::AppState;

const CLASSIFY_OPTIONS: GenerateOptions = GenerateOptions {
    temperature: 0.1,
    num_predict: None,
};

pub async fn classify_title_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    REQUEST_TOTAL.inc();

    let title = payload.title.trim().to_string();
    let model = payload.model;
    let cache_key = category_key(&title, &model);

    if let Some(CachedResponse::Category(cached)) = state.cache.fresh(&cache_key) {
        CACHE_HITS.inc();
        tracing::debug!(key = %cache_key, "Cache HIT");
        return Ok(Json(cached));
    }
    CACHE_MISSES.inc();
    tracing::debug!(key = %cache_key, "Cache MISS - calling Ollama");

    let start_time = Instant::now();
    let raw = state
        .backend
        .generate(&model, &build_classification_prompt(&title), CLASSIFY_OPTIONS)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error classifying title");
            AppError::Classification(e)
        })?;

    let matched = category::resolve(&raw);
    let processing_time = start_time.elapsed().as_secs_f64();
    UPSTREAM_LATENCY.observe(processing_time);

    let response = CategoryResponse {
        title,
        category: matched.name.to_string(),
        color: matched.color.to_string(),
        processing_time,
    };

    state
        .cache
        .put(cache_key, CachedResponse::Category(response.clone()));
    CACHE_SIZE.set(state.cache.len() as f64);

    tracing::info!(
        model = %model,
        title = %response.title,
        category = %response.category,
        elapsed = processing_time,
        "Classified title"
    );
    Ok(Json(response))
}
