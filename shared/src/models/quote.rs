//! Quote Breakdown
//!
//! The computed output of a pricing request. Created fresh per request,
//! never mutated after construction; serialized as-is by REST callers.
//!
//! Money semantics: every line is rounded to 2 decimals exactly once, when
//! the breakdown is built, and `total_ht` is the sum of the rounded lines;
//! re-summing the itemization always reproduces the reported total.

use crate::models::OptionKey;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One margined option line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub key: OptionKey,
    /// Purchase-side cost, euros HT.
    pub purchase_ht: Decimal,
    /// Margin coefficient applied to this line.
    pub coefficient: Decimal,
    /// Customer-facing price, euros HT, rounded to 2 decimals.
    pub sale_ht: Decimal,
}

/// Long-freight carrier surcharge, re-billed at cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportLine {
    /// Euros HT, margin coefficient fixed at 1.0.
    pub fee_ht: Decimal,
    pub reason: String,
}

/// Installation cost for a covered department, or the explicit statement
/// that the zone is not covered: never a silently invented fallback price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationQuote {
    pub available: bool,
    /// 2-digit department code extracted from the postal code.
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_time: Option<String>,
    /// Base installation price (scaled above 6000 mm), euros HT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_install_ht: Option<Decimal>,
    /// Flat travel surcharge, euros HT, never margined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_surcharge_ht: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ht: Option<Decimal>,
    pub message: String,
}

impl InstallationQuote {
    pub fn covered(
        department: String,
        zone_name: String,
        lead_time: String,
        base_install_ht: Decimal,
        travel_surcharge_ht: Decimal,
    ) -> Self {
        let message = format!(
            "Installation available in {zone_name} ({department}), lead time {lead_time}"
        );
        Self {
            available: true,
            department,
            zone_name: Some(zone_name),
            lead_time: Some(lead_time),
            base_install_ht: Some(base_install_ht),
            travel_surcharge_ht: Some(travel_surcharge_ht),
            total_ht: Some(base_install_ht + travel_surcharge_ht),
            message,
        }
    }

    pub fn not_covered(department: String) -> Self {
        Self {
            available: false,
            message: format!(
                "Department {department} is not covered yet: contact us for installation"
            ),
            department,
            zone_name: None,
            lead_time: None,
            base_install_ht: None,
            travel_surcharge_ht: None,
            total_ht: None,
        }
    }
}

/// The full, itemized result of one pricing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub quote_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub model_id: String,
    pub model_name: String,
    pub width_mm: u32,
    pub projection_mm: u32,

    /// Base store purchase price from the tier grid, euros HT.
    pub base_purchase_ht: Decimal,
    /// Sum of option purchase-side surcharges, euros HT.
    pub options_purchase_ht: Decimal,

    /// Margined base store price, euros HT, rounded.
    pub base_sale_ht: Decimal,
    /// Independently margined option lines, each rounded.
    pub option_lines: Vec<QuoteLine>,
    /// Present only when the long-transport rule applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportLine>,

    /// Customer total HT: exact sum of `base_sale_ht`, the option lines
    /// and the transport fee.
    pub total_ht: Decimal,
    /// VAT rate applied to the whole quote (binary: reduced or standard).
    pub vat_rate: Decimal,
    /// Customer total TTC, rounded to 2 decimals.
    pub total_ttc: Decimal,

    /// Separate installation line; absent when no postal code was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation: Option<InstallationQuote>,
}

impl QuoteBreakdown {
    /// Re-sum the itemized HT lines. Equals `total_ht` exactly: the
    /// round-trip guarantee callers may assert after deserialization.
    pub fn resum_ht(&self) -> Decimal {
        let options: Decimal = self.option_lines.iter().map(|line| line.sale_ht).sum();
        let transport = self
            .transport
            .as_ref()
            .map(|t| t.fee_ht)
            .unwrap_or(Decimal::ZERO);
        self.base_sale_ht + options + transport
    }
}
