//! Catalog loader and load-time validation
//!
//! Reads `catalog.json`, `zones.json` and `pricing.json` from the catalog
//! directory into one consistent snapshot. Invariants (tier ordering,
//! positive prices, positive coefficients) are checked once here, so the
//! pricing functions can rely on them without re-validating per call.

use serde::{Deserialize, Serialize};
use shared::models::{InterventionZone, OptionPrices, PricingConfig, StoreModel};
use std::collections::BTreeMap;
use std::path::Path;

/// One consistent, already-resolved catalog snapshot.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub models: BTreeMap<String, StoreModel>,
    pub option_prices: OptionPrices,
    /// Intervention zones keyed by 2-digit department code.
    pub zones: BTreeMap<String, InterventionZone>,
}

impl Catalog {
    pub fn model(&self, id: &str) -> Option<&StoreModel> {
        self.models.get(id)
    }

    pub fn model_by_slug(&self, slug: &str) -> Option<&StoreModel> {
        self.models.values().find(|model| model.slug == slug)
    }

    /// Check the catalog invariants. Run once at load; a violating catalog
    /// is rejected at startup instead of producing wrong prices later.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (key, model) in &self.models {
            if key != &model.id {
                return Err(CatalogError::Invalid(format!(
                    "model keyed {key} declares id {}",
                    model.id
                )));
            }
            if model.buy_prices.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "model {key} has no price grid"
                )));
            }
            for (projection, tiers) in &model.buy_prices {
                validate_tiers(key, *projection, tiers)?;
                if let Some(&min_width) = model.min_widths.get(projection)
                    && let Some(last) = tiers.last()
                    && min_width > last.max_width_mm
                {
                    return Err(CatalogError::Invalid(format!(
                        "model {key} projection {projection}: minimum width {min_width}mm \
                         exceeds the last tier ({}mm)",
                        last.max_width_mm
                    )));
                }
            }
            if let Some(steps) = &model.ceiling_mount_prices {
                validate_steps(&format!("model {key} ceiling mount"), steps)?;
            }
        }

        self.validate_option_prices()?;

        for (department, zone) in &self.zones {
            if department.len() != 2 || !department.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CatalogError::Invalid(format!(
                    "zone key '{department}' is not a 2-digit department code"
                )));
            }
            if zone.base_install_ht <= rust_decimal::Decimal::ZERO {
                return Err(CatalogError::Invalid(format!(
                    "zone {department}: base installation price must be strictly positive"
                )));
            }
            if zone.per_extra_meter_ht < rust_decimal::Decimal::ZERO
                || zone.travel_surcharge_ht < rust_decimal::Decimal::ZERO
            {
                return Err(CatalogError::Invalid(format!(
                    "zone {department}: negative amount"
                )));
            }
        }

        Ok(())
    }

    fn validate_option_prices(&self) -> Result<(), CatalogError> {
        use rust_decimal::Decimal;
        let prices = &self.option_prices;
        for (projection, grid) in &prices.led_arms {
            for (arms, price) in grid {
                if *price <= Decimal::ZERO {
                    return Err(CatalogError::Invalid(format!(
                        "LED arms price for projection {projection}/{arms} arms must be positive"
                    )));
                }
            }
        }
        validate_steps("rolling lambrequin (manual)", &prices.lambrequin_enroulable.manual)?;
        validate_steps(
            "rolling lambrequin (motorized)",
            &prices.lambrequin_enroulable.motorized,
        )?;
        if prices.transport.width_threshold_mm == 0 || prices.transport.fee_ht < Decimal::ZERO {
            return Err(CatalogError::Invalid("invalid transport rule".into()));
        }
        Ok(())
    }
}

fn validate_tiers(
    model: &str,
    projection: u32,
    tiers: &[shared::models::PriceTier],
) -> Result<(), CatalogError> {
    if tiers.is_empty() {
        return Err(CatalogError::Invalid(format!(
            "model {model} projection {projection}: empty tier list"
        )));
    }
    let mut previous = 0u32;
    for tier in tiers {
        if tier.max_width_mm <= previous {
            return Err(CatalogError::Invalid(format!(
                "model {model} projection {projection}: tiers must be strictly ascending by \
                 max width ({}mm after {previous}mm)",
                tier.max_width_mm
            )));
        }
        if tier.purchase_price_ht <= rust_decimal::Decimal::ZERO {
            return Err(CatalogError::Invalid(format!(
                "model {model} projection {projection}: purchase price must be strictly positive \
                 at {}mm",
                tier.max_width_mm
            )));
        }
        previous = tier.max_width_mm;
    }
    Ok(())
}

fn validate_steps(what: &str, steps: &[shared::models::PriceStep]) -> Result<(), CatalogError> {
    let mut previous = 0u32;
    for step in steps {
        if step.max_width_mm <= previous {
            return Err(CatalogError::Invalid(format!(
                "{what}: steps must be strictly ascending by max width"
            )));
        }
        if step.price_ht < rust_decimal::Decimal::ZERO {
            return Err(CatalogError::Invalid(format!("{what}: negative price")));
        }
        previous = step.max_width_mm;
    }
    Ok(())
}

/// Catalog loading failures. All fatal at startup: a server without a
/// valid catalog cannot price anything.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// On-disk shape of `catalog.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub models: BTreeMap<String, StoreModel>,
    pub option_prices: OptionPrices,
}

/// Load and validate the catalog snapshot from `catalog.json` +
/// `zones.json` under `dir`.
pub fn load_catalog(dir: &Path) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = read_json(&dir.join("catalog.json"))?;
    let zones: BTreeMap<String, InterventionZone> = read_json(&dir.join("zones.json"))?;

    let catalog = Catalog {
        models: file.models,
        option_prices: file.option_prices,
        zones,
    };
    catalog.validate()?;

    tracing::info!(
        models = catalog.models.len(),
        zones = catalog.zones.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load and validate the pricing configuration from `pricing.json`.
pub fn load_pricing_config(dir: &Path) -> Result<PricingConfig, CatalogError> {
    let config: PricingConfig = read_json(&dir.join("pricing.json"))?;
    config.validate().map_err(CatalogError::Invalid)?;
    Ok(config)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: display,
        source,
    })
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::testutil::{make_config, make_model, make_option_prices, make_zones};
    use rust_decimal::Decimal;

    fn make_catalog() -> Catalog {
        let model = make_model();
        Catalog {
            models: [(model.id.clone(), model)].into_iter().collect(),
            option_prices: make_option_prices(),
            zones: make_zones(),
        }
    }

    #[test]
    fn test_valid_catalog_passes() {
        make_catalog().validate().unwrap();
    }

    #[test]
    fn test_lookup_by_slug() {
        let catalog = make_catalog();
        assert_eq!(
            catalog
                .model_by_slug("store-banne-coffre-kissimy")
                .map(|m| m.id.as_str()),
            Some("kissimy")
        );
        assert!(catalog.model_by_slug("nope").is_none());
    }

    #[test]
    fn test_unsorted_tiers_rejected() {
        let mut catalog = make_catalog();
        catalog
            .models
            .get_mut("kissimy")
            .unwrap()
            .buy_prices
            .get_mut(&1500)
            .unwrap()
            .swap(0, 1);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::Invalid(msg)) if msg.contains("ascending")
        ));
    }

    #[test]
    fn test_duplicate_tier_boundary_rejected() {
        let mut catalog = make_catalog();
        let tiers = catalog
            .models
            .get_mut("kissimy")
            .unwrap()
            .buy_prices
            .get_mut(&1500)
            .unwrap();
        let duplicate = tiers[0];
        tiers.insert(1, duplicate);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let mut catalog = make_catalog();
        catalog
            .models
            .get_mut("kissimy")
            .unwrap()
            .buy_prices
            .get_mut(&1500)
            .unwrap()[0]
            .purchase_price_ht = Decimal::ZERO;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_bad_zone_key_rejected() {
        let mut catalog = make_catalog();
        let zone = catalog.zones.get("91").unwrap().clone();
        catalog.zones.insert("9A".into(), zone);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_load_round_trip_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = make_catalog();

        let file = CatalogFile {
            models: catalog.models.clone(),
            option_prices: catalog.option_prices.clone(),
        };
        std::fs::write(
            dir.path().join("catalog.json"),
            serde_json::to_string_pretty(&file).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("zones.json"),
            serde_json::to_string_pretty(&catalog.zones).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("pricing.json"),
            serde_json::to_string_pretty(&make_config()).unwrap(),
        )
        .unwrap();

        let loaded = load_catalog(dir.path()).unwrap();
        assert_eq!(loaded.models.len(), 1);
        assert_eq!(
            loaded.models["kissimy"].buy_prices[&1500],
            catalog.models["kissimy"].buy_prices[&1500]
        );

        let config = load_pricing_config(dir.path()).unwrap();
        assert_eq!(config, make_config());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_catalog(dir.path()),
            Err(CatalogError::Io { .. })
        ));
    }
}
