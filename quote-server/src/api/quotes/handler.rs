//! Quote API handler
//!
//! Accepts a configuration (slug, dimensions, options, optional postal
//! code) and returns the priced breakdown. The engine does the work; this
//! handler only resolves the slug and shapes the envelope.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{OptionSelection, QuoteBreakdown};

use crate::core::ServerState;
use crate::pricing::{QuoteRequest, build_quote};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct QuoteRequestBody {
    pub slug: String,
    pub width_mm: u32,
    pub projection_mm: u32,
    #[serde(default)]
    pub options: OptionSelection,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub installed_by_pro: bool,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponseBody {
    pub success: bool,
    pub product: String,
    pub customer_price_ht: Decimal,
    pub customer_price_ttc: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub breakdown: QuoteBreakdown,
}

/// POST /api/quotes - price one configuration
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<QuoteRequestBody>,
) -> AppResult<Json<QuoteResponseBody>> {
    let catalog = state.catalog.catalog();
    let pricing = state.catalog.pricing();

    let model = catalog
        .model_by_slug(&body.slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown product: {}", body.slug)))?;

    let request = QuoteRequest {
        model_id: model.id.clone(),
        width_mm: body.width_mm,
        projection_mm: body.projection_mm,
        options: body.options,
        postal_code: body.postal_code,
        installed_by_pro: body.installed_by_pro,
    };

    let breakdown = build_quote(&catalog, &pricing, &request)?;

    tracing::info!(
        slug = %body.slug,
        width_mm = body.width_mm,
        projection_mm = body.projection_mm,
        total_ht = %breakdown.total_ht,
        "quote computed"
    );

    let message = breakdown
        .transport
        .is_some()
        .then(|| "Long-freight surcharge included".to_string());

    Ok(Json(QuoteResponseBody {
        success: true,
        product: breakdown.model_name.clone(),
        customer_price_ht: breakdown.total_ht,
        customer_price_ttc: breakdown.total_ttc,
        message,
        breakdown,
    }))
}
