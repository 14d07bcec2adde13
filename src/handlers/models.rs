use axum::{Json, extract::State};
use std::sync::Arc;
use crate::error::AppError;
use crate::models::ModelsResponse;
use crate::state::AppState;

pub async fn list_models_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ModelsResponse>, AppError> {
    let models = state.backend.list_models().await?;
    Ok(Json(ModelsResponse { models }))
}
