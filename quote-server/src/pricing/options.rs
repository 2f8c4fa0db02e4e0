//! Option Surcharge Calculator
//!
//! Computes the purchase-side cost of the selected options, itemized per
//! option key so the aggregator can render a line-item breakdown.
//!
//! Precondition: option compatibility has been validated against the
//! model's capability flags by the caller. This calculator trusts the
//! input and prices what it is asked; [`check_compatibility`] is the
//! strict variant the quote aggregator runs first.

use rust_decimal::Decimal;
use shared::QuoteError;
use shared::models::{
    LambrequinChoice, OptionKey, OptionPrices, OptionSelection, PriceStep, StoreModel,
};

/// One purchase-side surcharge line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurchargeLine {
    pub key: OptionKey,
    pub purchase_ht: Decimal,
}

/// Itemized option surcharges for one configuration.
#[derive(Debug, Clone, Default)]
pub struct OptionsSurcharge {
    pub lines: Vec<SurchargeLine>,
    /// Long-freight carrier fee. Kept out of `lines`: it is re-billed at
    /// cost and must never be multiplied by a margin coefficient.
    pub transport_ht: Option<Decimal>,
}

impl OptionsSurcharge {
    /// Sum of the option lines, excluding transport.
    pub fn options_total_ht(&self) -> Decimal {
        self.lines.iter().map(|line| line.purchase_ht).sum()
    }

    /// Sum of everything purchase-side, transport included.
    pub fn total_purchase_ht(&self) -> Decimal {
        self.options_total_ht() + self.transport_ht.unwrap_or(Decimal::ZERO)
    }
}

/// Validate the selection against the model's capability flags.
///
/// Returns the first incompatible option found.
pub fn check_compatibility(
    model: &StoreModel,
    selection: &OptionSelection,
) -> Result<(), QuoteError> {
    let compat = &model.compatibility;
    for key in selection.selected_keys() {
        let supported = match key {
            OptionKey::LedArms => compat.led_arms,
            OptionKey::LedCassette => compat.led_box,
            OptionKey::LambrequinFixe => compat.lambrequin_fixe,
            OptionKey::LambrequinEnroulable => compat.lambrequin_enroulable,
            OptionKey::CeilingMount => compat.ceiling_mount,
            OptionKey::Auvent => compat.auvent,
            // Any frame can be powder-coated to another RAL.
            OptionKey::FrameColorCustom => true,
        };
        if !supported {
            return Err(QuoteError::IncompatibleOption {
                model: model.id.clone(),
                option: key,
            });
        }
    }
    Ok(())
}

/// Price the selected options at purchase cost.
///
/// Width-dependent options read their tier grids; a grid gap (e.g. rolling
/// lambrequin beyond its last tier) skips the line rather than failing the
/// quote, mirroring how the supplier price lists behave.
pub fn compute_options_surcharge(
    model: &StoreModel,
    prices: &OptionPrices,
    width_mm: u32,
    projection_mm: u32,
    selection: &OptionSelection,
) -> OptionsSurcharge {
    let mut lines = Vec::new();

    if selection.led_arms {
        if let Some(price) = led_arms_price(model, prices, width_mm, projection_mm) {
            lines.push(SurchargeLine {
                key: OptionKey::LedArms,
                purchase_ht: price,
            });
        }
    }

    if selection.led_box {
        lines.push(SurchargeLine {
            key: OptionKey::LedCassette,
            purchase_ht: model.led_box_price.unwrap_or(prices.led_cassette),
        });
    }

    match selection.lambrequin {
        LambrequinChoice::None => {}
        LambrequinChoice::Fixe => lines.push(SurchargeLine {
            key: OptionKey::LambrequinFixe,
            purchase_ht: prices.lambrequin_fixe,
        }),
        LambrequinChoice::Enroulable { motorized } => {
            let steps = if motorized {
                &prices.lambrequin_enroulable.motorized
            } else {
                &prices.lambrequin_enroulable.manual
            };
            match find_step(steps, width_mm) {
                Some(price) => lines.push(SurchargeLine {
                    key: OptionKey::LambrequinEnroulable,
                    purchase_ht: price,
                }),
                None => tracing::warn!(
                    model = %model.id,
                    width_mm,
                    motorized,
                    "no rolling-lambrequin price step for this width, option skipped"
                ),
            }
        }
    }

    if selection.ceiling_mount {
        // No grid means the ceiling mount is included in the base price.
        if let Some(steps) = &model.ceiling_mount_prices
            && let Some(price) = find_step(steps, width_mm)
        {
            lines.push(SurchargeLine {
                key: OptionKey::CeilingMount,
                purchase_ht: price,
            });
        }
    }

    if selection.auvent {
        let meters = Decimal::from(width_mm) / Decimal::from(1000);
        lines.push(SurchargeLine {
            key: OptionKey::Auvent,
            purchase_ht: prices.auvent_per_meter * meters,
        });
    }

    if selection.custom_frame_color {
        lines.push(SurchargeLine {
            key: OptionKey::FrameColorCustom,
            purchase_ht: prices.frame_color_custom,
        });
    }

    let transport_ht = (width_mm > prices.transport.width_threshold_mm).then_some(prices.transport.fee_ht);

    OptionsSurcharge {
        lines,
        transport_ht,
    }
}

/// LED arm kit price: grid keyed by projection, then arm count. A missing
/// arm-count column falls back to the 2-arm kit.
fn led_arms_price(
    model: &StoreModel,
    prices: &OptionPrices,
    width_mm: u32,
    projection_mm: u32,
) -> Option<Decimal> {
    let grid = match prices.led_arms.get(&projection_mm) {
        Some(grid) => grid,
        None => {
            tracing::warn!(
                model = %model.id,
                projection_mm,
                "no LED arm kit prices for this projection, option skipped"
            );
            return None;
        }
    };
    let arms = model.arm_logic.arm_count(width_mm);
    grid.get(&arms).or_else(|| grid.get(&2)).copied()
}

fn find_step(steps: &[PriceStep], width_mm: u32) -> Option<Decimal> {
    steps
        .iter()
        .find(|step| step.max_width_mm >= width_mm)
        .map(|step| step.price_ht)
}

// ==================== Tests ====================
