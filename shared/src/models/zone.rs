//! Intervention Zone
//!
//! Department-level installation coverage: lead time, travel surcharge and
//! the width-scaled installation price. Keyed by the 2-digit department
//! code (first two characters of a French postal code).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// One covered department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionZone {
    /// Display name, e.g. "Essonne".
    pub name: String,
    /// Delivery/intervention lead-time label, e.g. "5-7 jours".
    pub lead_time: String,
    /// Listed zones can be toggled off without being removed.
    #[serde(default = "default_true")]
    pub available: bool,
    /// Flat travel surcharge in euros HT, never margined.
    pub travel_surcharge_ht: Decimal,
    /// Installation price in euros HT for widths up to 6000 mm.
    pub base_install_ht: Decimal,
    /// Per started meter above 6000 mm, in euros HT.
    pub per_extra_meter_ht: Decimal,
}
