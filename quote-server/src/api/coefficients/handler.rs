//! Admin coefficients handlers
//!
//! Typed read/replace of the pricing configuration (global, per-model and
//! per-option margin coefficients plus VAT rates). A PUT swaps the whole
//! snapshot after validation; in-flight quotes keep the snapshot they
//! started with.

use axum::{Json, extract::State};
use shared::models::PricingConfig;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/admin/coefficients - current pricing configuration
pub async fn get_config(State(state): State<ServerState>) -> Json<PricingConfig> {
    Json(state.catalog.pricing().as_ref().clone())
}

/// PUT /api/admin/coefficients - replace the pricing configuration
pub async fn update_config(
    State(state): State<ServerState>,
    Json(config): Json<PricingConfig>,
) -> AppResult<Json<PricingConfig>> {
    let snapshot = state
        .catalog
        .update_pricing(config)
        .map_err(|err| AppError::Validation(err.to_string()))?;
    Ok(Json(snapshot.as_ref().clone()))
}
