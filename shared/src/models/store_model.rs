//! Store Model
//!
//! A configurable retractable-awning model: capability flags, the
//! projection-keyed purchase price grid, and per-model option price
//! overrides. Reference data: immutable once loaded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One pricing bracket of a tier list.
///
/// Applies to widths up to `max_width_mm` **inclusive**; the smallest
/// bracket that accommodates a requested width wins ("round up to the next
/// capacity bracket").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub max_width_mm: u32,
    /// Supplier purchase price in euros HT, before any margin coefficient.
    pub purchase_price_ht: Decimal,
}

/// Width-stepped price for an option (ceiling mount, rolling lambrequin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceStep {
    pub max_width_mm: u32,
    pub price_ht: Decimal,
}

/// Which options a model can physically carry.
///
/// Compatibility is checked by the quote aggregator before pricing; the
/// surcharge calculator itself trusts its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compatibility {
    pub led_arms: bool,
    pub led_box: bool,
    pub lambrequin_fixe: bool,
    pub lambrequin_enroulable: bool,
    pub ceiling_mount: bool,
    pub auvent: bool,
}

/// How many folding arms a model mounts at a given width.
///
/// The arm count drives the LED-arms kit price (one strip per arm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmLogic {
    /// Always two arms, whatever the width.
    #[serde(rename = "STANDARD_2")]
    Standard2,
    /// Two arms, reinforced with a third above 5950 mm.
    #[serde(rename = "FORCE_2_3_4")]
    Force234,
    /// Coupled frames: two arms up to 6 m, four up to 11 m, six beyond.
    #[serde(rename = "COUPLES_4_6")]
    Couples46,
}

impl ArmLogic {
    pub fn arm_count(&self, width_mm: u32) -> u8 {
        match self {
            ArmLogic::Standard2 => 2,
            ArmLogic::Force234 => {
                if width_mm > 5950 {
                    3
                } else {
                    2
                }
            }
            ArmLogic::Couples46 => {
                if width_mm > 11000 {
                    6
                } else if width_mm > 6000 {
                    4
                } else {
                    2
                }
            }
        }
    }
}

/// A configurable awning model and its purchase price grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreModel {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub compatibility: Compatibility,
    pub arm_logic: ArmLogic,
    /// Minimum manufacturable width per projection (mm). A request below
    /// the minimum is out of range, same as one above the last tier.
    #[serde(default)]
    pub min_widths: BTreeMap<u32, u32>,
    /// Purchase price grid: projection (mm) → tier list, ascending by
    /// `max_width_mm`. Validated at catalog load.
    pub buy_prices: BTreeMap<u32, Vec<PriceTier>>,
    /// LED box (cassette) purchase price override; falls back to the
    /// option catalog default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led_box_price: Option<Decimal>,
    /// Ceiling-mount purchase prices by width. Absent means the mount is
    /// included in the base price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling_mount_prices: Option<Vec<PriceStep>>,
}

impl StoreModel {
    /// Projections (mm) this model is manufactured in, ascending.
    pub fn projections(&self) -> Vec<u32> {
        self.buy_prices.keys().copied().collect()
    }

    /// Smallest orderable width across all projections, if any.
    pub fn min_width_mm(&self) -> Option<u32> {
        self.min_widths.values().min().copied()
    }

    /// Largest orderable width across all projections, if any.
    pub fn max_width_mm(&self) -> Option<u32> {
        self.buy_prices
            .values()
            .filter_map(|tiers| tiers.last())
            .map(|tier| tier.max_width_mm)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_count_standard() {
        assert_eq!(ArmLogic::Standard2.arm_count(2000), 2);
        assert_eq!(ArmLogic::Standard2.arm_count(12000), 2);
    }

    #[test]
    fn test_arm_count_force() {
        assert_eq!(ArmLogic::Force234.arm_count(5950), 2);
        assert_eq!(ArmLogic::Force234.arm_count(5951), 3);
    }

    #[test]
    fn test_arm_count_couples() {
        assert_eq!(ArmLogic::Couples46.arm_count(6000), 2);
        assert_eq!(ArmLogic::Couples46.arm_count(6001), 4);
        assert_eq!(ArmLogic::Couples46.arm_count(11000), 4);
        assert_eq!(ArmLogic::Couples46.arm_count(11001), 6);
    }
}
