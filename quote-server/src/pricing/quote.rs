//! Quote Aggregator
//!
//! Orchestrates the resolver, the option calculator, the margin & VAT
//! pricer and (when a postal code is supplied) the installation
//! calculator into one [`QuoteBreakdown`]. Fails fast on the first
//! error: no partial pricing.

use chrono::Utc;
use shared::QuoteError;
use shared::models::{OptionSelection, QuoteBreakdown, TransportLine};
use uuid::Uuid;

use crate::catalog::Catalog;
use shared::models::PricingConfig;

use super::installation::calculate_installation_cost;
use super::margin::apply_margin_and_vat;
use super::options::{check_compatibility, compute_options_surcharge};
use super::resolver::resolve_base_price;

/// One pricing request, already resolved to a model id.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub model_id: String,
    pub width_mm: u32,
    pub projection_mm: u32,
    pub options: OptionSelection,
    /// Installation is optional: without a postal code the breakdown
    /// omits the installation line entirely.
    pub postal_code: Option<String>,
    pub installed_by_pro: bool,
}

/// Build the full itemized quote for one configuration.
///
/// Deterministic given identical inputs: no I/O, no persistence, no shared
/// mutable state.
pub fn build_quote(
    catalog: &Catalog,
    config: &PricingConfig,
    request: &QuoteRequest,
) -> Result<QuoteBreakdown, QuoteError> {
    let model = catalog
        .model(&request.model_id)
        .ok_or_else(|| QuoteError::UnknownModel(request.model_id.clone()))?;

    check_compatibility(model, &request.options)?;

    let base_purchase_ht = resolve_base_price(model, request.projection_mm, request.width_mm)?;

    let surcharge = compute_options_surcharge(
        model,
        &catalog.option_prices,
        request.width_mm,
        request.projection_mm,
        &request.options,
    );

    let priced = apply_margin_and_vat(
        base_purchase_ht,
        &surcharge,
        &model.id,
        config,
        request.installed_by_pro,
    );

    let installation = match request.postal_code.as_deref() {
        Some(postal_code) => Some(calculate_installation_cost(
            request.width_mm,
            postal_code,
            &catalog.zones,
        )?),
        None => None,
    };

    let transport = priced.transport_ht.map(|fee_ht| TransportLine {
        fee_ht,
        reason: format!(
            "width {}mm exceeds the {}mm carrier limit",
            request.width_mm, catalog.option_prices.transport.width_threshold_mm
        ),
    });

    Ok(QuoteBreakdown {
        quote_id: Uuid::new_v4(),
        created_at: Utc::now(),
        model_id: model.id.clone(),
        model_name: model.name.clone(),
        width_mm: request.width_mm,
        projection_mm: request.projection_mm,
        base_purchase_ht,
        options_purchase_ht: surcharge.options_total_ht(),
        base_sale_ht: priced.base_sale_ht,
        option_lines: priced.option_lines,
        transport,
        total_ht: priced.total_ht,
        vat_rate: priced.vat_rate,
        total_ttc: priced.total_ttc,
        installation,
    })
}

// ==================== Tests ====================
