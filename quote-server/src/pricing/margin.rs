//! Margin & VAT Pricer
//!
//! Converts purchase-side totals into customer-facing prices. The customer
//! total is NOT `purchase_total × one_coefficient`: the base store price
//! and every option line are margined independently, each with its own
//! coefficient, then summed. The long-transport fee is exempt (coefficient
//! 1.0) and added after margining.
//!
//! All arithmetic runs in `Decimal`; each line is rounded to 2 decimals
//! (half-up) exactly once, here, where the customer-facing figures are
//! fixed. The HT total is the exact sum of the rounded lines, so an
//! itemized breakdown always re-sums to its reported total.

use rust_decimal::prelude::*;
use shared::models::{PricingConfig, QuoteLine};

use super::options::OptionsSurcharge;

/// Monetary rounding: 2 decimal places, half-up.
const DECIMAL_PLACES: u32 = 2;

/// Round a customer-facing amount to whole cents.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Customer-side prices for one quote, before installation.
#[derive(Debug, Clone)]
pub struct PricedComponents {
    /// Margined base store price, rounded.
    pub base_sale_ht: Decimal,
    /// Independently margined option lines, each rounded.
    pub option_lines: Vec<QuoteLine>,
    /// Long-transport pass-through (coefficient 1.0), if applicable.
    pub transport_ht: Option<Decimal>,
    /// Exact sum of the rounded components above.
    pub total_ht: Decimal,
    /// VAT rate applied to the whole quote.
    pub vat_rate: Decimal,
    /// `total_ht × (1 + vat_rate)`, rounded.
    pub total_ttc: Decimal,
}

/// Apply margin coefficients and VAT.
///
/// `installed_by_pro` selects the reduced VAT rate for the whole quote
/// (product and professional installation are bundled); otherwise the
/// standard rate applies. Never a blended rate.
pub fn apply_margin_and_vat(
    base_purchase_ht: Decimal,
    surcharge: &OptionsSurcharge,
    model_id: &str,
    config: &PricingConfig,
    installed_by_pro: bool,
) -> PricedComponents {
    let base_sale_ht = round_money(base_purchase_ht * config.store_coefficient(model_id));
    let mut total_ht = base_sale_ht;

    let mut option_lines = Vec::with_capacity(surcharge.lines.len());
    for line in &surcharge.lines {
        let coefficient = config.option_coefficient(model_id, line.key);
        let sale_ht = round_money(line.purchase_ht * coefficient);
        total_ht += sale_ht;
        option_lines.push(QuoteLine {
            key: line.key,
            purchase_ht: line.purchase_ht,
            coefficient,
            sale_ht,
        });
    }

    // Re-billed at cost, after margining.
    let transport_ht = surcharge.transport_ht.map(round_money);
    if let Some(fee) = transport_ht {
        total_ht += fee;
    }

    let vat_rate = config.vat_rate(installed_by_pro);
    let total_ttc = round_money(total_ht * (Decimal::ONE + vat_rate));

    PricedComponents {
        base_sale_ht,
        option_lines,
        transport_ht,
        total_ht,
        vat_rate,
        total_ttc,
    }
}

// ==================== Tests ====================
