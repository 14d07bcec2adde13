use axum::{Json, extract::State};
use std::sync::Arc;
use crate::models::HealthReport;
use crate::state::AppState;

// health handler, always 200
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(state.backend.health().await)
}
