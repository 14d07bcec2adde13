use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use crate::handlers::{
    classify_title_handler, fix_title_handler, health_handler, list_models_handler,
    metrics_handler,
};
use crate::state::AppState;

// Build the router with every route and a CORS layer open to all origins,
// so the browser extension can call it from any YouTube page.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/fix-title", post(fix_title_handler))
        .route("/classify-title", post(classify_title_handler))
        .route("/models", get(list_models_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .layer(cors)
        .with_state(state)
}
