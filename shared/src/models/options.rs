//! Option Catalog
//!
//! Selectable options, their purchase-side price catalog, and the
//! long-transport rule. Option keys double as coefficient keys in
//! [`crate::models::PricingConfig`].

use crate::models::store_model::PriceStep;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option identifier, also used as margin-coefficient key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionKey {
    LedArms,
    LedCassette,
    LambrequinFixe,
    LambrequinEnroulable,
    CeilingMount,
    Auvent,
    FrameColorCustom,
}

/// Lambrequin configuration. Fixed and rolling are alternatives, and the
/// manual/motorized rolling variants are mutually exclusive, never additive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "type")]
pub enum LambrequinChoice {
    #[default]
    None,
    Fixe,
    Enroulable { motorized: bool },
}

/// The buyer's option picks for one quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSelection {
    pub led_arms: bool,
    pub led_box: bool,
    pub lambrequin: LambrequinChoice,
    pub ceiling_mount: bool,
    pub auvent: bool,
    /// Frame color outside the three standard RALs ("other RAL").
    pub custom_frame_color: bool,
}

impl OptionSelection {
    /// Option keys this selection will be priced under, for compatibility
    /// validation.
    pub fn selected_keys(&self) -> Vec<OptionKey> {
        let mut keys = Vec::new();
        if self.led_arms {
            keys.push(OptionKey::LedArms);
        }
        if self.led_box {
            keys.push(OptionKey::LedCassette);
        }
        match self.lambrequin {
            LambrequinChoice::None => {}
            LambrequinChoice::Fixe => keys.push(OptionKey::LambrequinFixe),
            LambrequinChoice::Enroulable { .. } => keys.push(OptionKey::LambrequinEnroulable),
        }
        if self.ceiling_mount {
            keys.push(OptionKey::CeilingMount);
        }
        if self.auvent {
            keys.push(OptionKey::Auvent);
        }
        if self.custom_frame_color {
            keys.push(OptionKey::FrameColorCustom);
        }
        keys
    }
}

/// Rolling-lambrequin purchase prices, width-stepped, one list per drive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LambrequinEnroulablePrices {
    pub manual: Vec<PriceStep>,
    pub motorized: Vec<PriceStep>,
}

/// Long-freight carrier surcharge rule.
///
/// Applies when the crate exceeds the carrier's standard length. Re-billed
/// at cost: the margin coefficient is pinned to 1.0 downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportRule {
    pub width_threshold_mm: u32,
    pub fee_ht: Decimal,
}

/// Purchase-side option price catalog, shared by all models (per-model
/// overrides live on [`crate::models::StoreModel`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionPrices {
    /// LED arm kit price by projection (mm), then arm count.
    pub led_arms: BTreeMap<u32, BTreeMap<u8, Decimal>>,
    /// LED box (cassette) default price.
    pub led_cassette: Decimal,
    /// Fixed lambrequin, flat.
    pub lambrequin_fixe: Decimal,
    pub lambrequin_enroulable: LambrequinEnroulablePrices,
    /// Awning accessory (auvent), per linear meter of width.
    pub auvent_per_meter: Decimal,
    /// "Other RAL" frame color premium, flat.
    pub frame_color_custom: Decimal,
    pub transport: TransportRule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_keys_empty() {
        assert!(OptionSelection::default().selected_keys().is_empty());
    }

    #[test]
    fn test_selected_keys_lambrequin_variants_are_exclusive() {
        let fixe = OptionSelection {
            lambrequin: LambrequinChoice::Fixe,
            ..Default::default()
        };
        assert_eq!(fixe.selected_keys(), vec![OptionKey::LambrequinFixe]);

        let rolling = OptionSelection {
            lambrequin: LambrequinChoice::Enroulable { motorized: true },
            ..Default::default()
        };
        assert_eq!(
            rolling.selected_keys(),
            vec![OptionKey::LambrequinEnroulable]
        );
    }
}
