//! Pricing Configuration
//!
//! Margin coefficients and VAT rates as one explicit, typed value. Loaded
//! once by the caller and passed by reference into the pricing functions;
//! the engine never mutates it. Admin tooling reads and replaces whole
//! snapshots through the coefficients API.

use crate::models::OptionKey;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Margin coefficients (global, per model, per option) plus VAT rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Coefficient applied to the base store price when no per-model
    /// override exists. Also the last fallback for options with no
    /// coefficient of their own.
    pub default_coefficient: Decimal,
    /// Per-model override of the store coefficient.
    #[serde(default)]
    pub model_coefficients: BTreeMap<String, Decimal>,
    /// Global per-option coefficients.
    #[serde(default)]
    pub option_coefficients: BTreeMap<OptionKey, Decimal>,
    /// Per-model per-option overrides (promotions, at-cost options).
    #[serde(default)]
    pub model_option_coefficients: BTreeMap<String, BTreeMap<OptionKey, Decimal>>,
    /// Standard VAT rate as a fraction, e.g. 0.20.
    pub vat_standard: Decimal,
    /// Reduced VAT rate for professional installation, e.g. 0.10.
    pub vat_reduced: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_coefficient: Decimal::ONE,
            model_coefficients: BTreeMap::new(),
            option_coefficients: BTreeMap::new(),
            model_option_coefficients: BTreeMap::new(),
            vat_standard: Decimal::new(20, 2),
            vat_reduced: Decimal::new(10, 2),
        }
    }
}

impl PricingConfig {
    /// Coefficient for a model's base store price.
    pub fn store_coefficient(&self, model_id: &str) -> Decimal {
        self.model_coefficients
            .get(model_id)
            .copied()
            .unwrap_or(self.default_coefficient)
    }

    /// Coefficient for one option line.
    ///
    /// Fallback chain: per-model per-option override → global per-option
    /// default → the coefficient used for the model's base store price.
    pub fn option_coefficient(&self, model_id: &str, key: OptionKey) -> Decimal {
        if let Some(overrides) = self.model_option_coefficients.get(model_id)
            && let Some(&coeff) = overrides.get(&key)
        {
            return coeff;
        }
        self.option_coefficients
            .get(&key)
            .copied()
            .unwrap_or_else(|| self.store_coefficient(model_id))
    }

    /// VAT rate for one quote. All-or-nothing: reduced rate when the
    /// product is installed by a professional, standard otherwise.
    pub fn vat_rate(&self, installed_by_pro: bool) -> Decimal {
        if installed_by_pro {
            self.vat_reduced
        } else {
            self.vat_standard
        }
    }

    /// Check the invariants: coefficients strictly positive, VAT rates in
    /// [0, 1).
    pub fn validate(&self) -> Result<(), String> {
        if self.default_coefficient <= Decimal::ZERO {
            return Err("default coefficient must be strictly positive".into());
        }
        for (model, coeff) in &self.model_coefficients {
            if *coeff <= Decimal::ZERO {
                return Err(format!("coefficient for model {model} must be strictly positive"));
            }
        }
        for (key, coeff) in &self.option_coefficients {
            if *coeff <= Decimal::ZERO {
                return Err(format!("coefficient for option {key:?} must be strictly positive"));
            }
        }
        for (model, overrides) in &self.model_option_coefficients {
            for (key, coeff) in overrides {
                if *coeff <= Decimal::ZERO {
                    return Err(format!(
                        "coefficient for option {key:?} on model {model} must be strictly positive"
                    ));
                }
            }
        }
        for (label, rate) in [("standard", self.vat_standard), ("reduced", self.vat_reduced)] {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(format!("{label} VAT rate must be within [0, 1)"));
            }
        }
        Ok(())
    }
}
