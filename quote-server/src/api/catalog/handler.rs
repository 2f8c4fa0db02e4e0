//! Catalog API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::StoreModel;

use crate::catalog::ModelSummary;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/catalog/models - margin-adjusted model summaries
///
/// This is what the chat assistant reads to converse about the range:
/// model names, width steps and customer-facing option prices.
pub async fn list(State(state): State<ServerState>) -> Json<Vec<ModelSummary>> {
    Json(state.catalog.model_summaries())
}

/// GET /api/catalog/models/{slug} - full model definition
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<StoreModel>> {
    let catalog = state.catalog.catalog();
    let model = catalog
        .model_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown product: {slug}")))?;
    Ok(Json(model.clone()))
}
