//! Catalog Service - immutable catalog snapshot plus swappable pricing
//! configuration
//!
//! Pricing requests take `Arc` snapshots of both, so a coefficient update
//! never tears an in-flight multi-step calculation: a quote either sees
//! the old configuration or the new one, whole.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{OptionKey, PricingConfig, StoreModel};
use std::sync::Arc;

use super::loader::{Catalog, CatalogError};
use crate::pricing::round_money;

/// Shared catalog state for the server.
pub struct CatalogService {
    catalog: Arc<Catalog>,
    pricing: RwLock<Arc<PricingConfig>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("models", &self.catalog.models.len())
            .field("zones", &self.catalog.zones.len())
            .finish()
    }
}

impl CatalogService {
    pub fn new(catalog: Catalog, pricing: PricingConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            pricing: RwLock::new(Arc::new(pricing)),
        }
    }

    /// The catalog snapshot (immutable for the process lifetime).
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.clone()
    }

    /// The current pricing configuration snapshot.
    pub fn pricing(&self) -> Arc<PricingConfig> {
        self.pricing.read().clone()
    }

    /// Validate and swap in a new pricing configuration (admin surface).
    pub fn update_pricing(&self, config: PricingConfig) -> Result<Arc<PricingConfig>, CatalogError> {
        config.validate().map_err(CatalogError::Invalid)?;
        let snapshot = Arc::new(config);
        *self.pricing.write() = snapshot.clone();
        tracing::info!("pricing configuration replaced");
        Ok(snapshot)
    }

    /// Margin-adjusted model summaries for the chat assistant and listing
    /// pages: names, dimension ranges and customer-facing "from" prices.
    pub fn model_summaries(&self) -> Vec<ModelSummary> {
        let pricing = self.pricing();
        self.catalog
            .models
            .values()
            .map(|model| summarize_model(&self.catalog, &pricing, model))
            .collect()
    }
}

/// One option as the assistant presents it: availability and a
/// margin-adjusted entry price.
#[derive(Debug, Clone, Serialize)]
pub struct OptionSummary {
    pub key: OptionKey,
    pub available: bool,
    /// Customer-facing "from" price, euros HT. Absent when unavailable or
    /// width-dependent with no representative price (e.g. included).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_price_ht: Option<Decimal>,
}

/// Catalog summary of one model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub projections_mm: Vec<u32>,
    pub min_width_mm: Option<u32>,
    pub max_width_mm: Option<u32>,
    /// Cheapest margined base price across the grid, euros HT.
    pub from_price_ht: Option<Decimal>,
    pub options: Vec<OptionSummary>,
}

fn summarize_model(
    catalog: &Catalog,
    pricing: &PricingConfig,
    model: &StoreModel,
) -> ModelSummary {
    let store_coefficient = pricing.store_coefficient(&model.id);
    let from_price_ht = model
        .buy_prices
        .values()
        .flatten()
        .map(|tier| tier.purchase_price_ht)
        .min()
        .map(|price| round_money(price * store_coefficient));

    let compat = &model.compatibility;
    let prices = &catalog.option_prices;
    let option_coeff = |key| pricing.option_coefficient(&model.id, key);
    let margined = |key, purchase: Decimal| Some(round_money(purchase * option_coeff(key)));

    let entries: [(OptionKey, bool, Option<Decimal>); 7] = [
        (
            OptionKey::LedArms,
            compat.led_arms,
            prices
                .led_arms
                .values()
                .filter_map(|grid| grid.get(&2))
                .min()
                .copied(),
        ),
        (
            OptionKey::LedCassette,
            compat.led_box,
            Some(model.led_box_price.unwrap_or(prices.led_cassette)),
        ),
        (
            OptionKey::LambrequinFixe,
            compat.lambrequin_fixe,
            Some(prices.lambrequin_fixe),
        ),
        (
            OptionKey::LambrequinEnroulable,
            compat.lambrequin_enroulable,
            prices
                .lambrequin_enroulable
                .manual
                .first()
                .map(|step| step.price_ht),
        ),
        (
            OptionKey::CeilingMount,
            compat.ceiling_mount,
            model
                .ceiling_mount_prices
                .as_ref()
                .and_then(|steps| steps.first())
                .map(|step| step.price_ht),
        ),
        (OptionKey::Auvent, compat.auvent, Some(prices.auvent_per_meter)),
        (
            OptionKey::FrameColorCustom,
            true,
            Some(prices.frame_color_custom),
        ),
    ];

    let options = entries
        .into_iter()
        .map(|(key, available, purchase)| OptionSummary {
            key,
            available,
            from_price_ht: if available {
                purchase.and_then(|price| margined(key, price))
            } else {
                None
            },
        })
        .collect();

    ModelSummary {
        id: model.id.clone(),
        name: model.name.clone(),
        slug: model.slug.clone(),
        projections_mm: model.projections(),
        min_width_mm: model.min_width_mm(),
        max_width_mm: model.max_width_mm(),
        from_price_ht,
        options,
    }
}

// ==================== Tests ====================
