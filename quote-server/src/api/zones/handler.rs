//! Zone API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use shared::models::{InstallationQuote, InterventionZone};

use crate::core::ServerState;
use crate::pricing::calculate_installation_cost;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct ZoneEntry {
    pub department: String,
    #[serde(flatten)]
    pub zone: InterventionZone,
}

/// GET /api/zones - covered departments
pub async fn list(State(state): State<ServerState>) -> Json<Vec<ZoneEntry>> {
    let catalog = state.catalog.catalog();
    let zones = catalog
        .zones
        .iter()
        .filter(|(_, zone)| zone.available)
        .map(|(department, zone)| ZoneEntry {
            department: department.clone(),
            zone: zone.clone(),
        })
        .collect();
    Json(zones)
}

#[derive(Debug, Deserialize)]
pub struct CheckParams {
    /// Optional width to include an installation cost estimate.
    pub width_mm: Option<u32>,
}

/// GET /api/zones/check/{postal_code}?width_mm= - coverage check
///
/// Without a width the estimate defaults to the base bracket (≤ 6 m).
pub async fn check(
    State(state): State<ServerState>,
    Path(postal_code): Path<String>,
    Query(params): Query<CheckParams>,
) -> AppResult<Json<InstallationQuote>> {
    let catalog = state.catalog.catalog();
    let width_mm = params.width_mm.unwrap_or(crate::pricing::INSTALL_BASE_WIDTH_MM);
    let quote = calculate_installation_cost(width_mm, &postal_code, &catalog.zones)?;
    Ok(Json(quote))
}
