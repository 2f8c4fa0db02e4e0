//! Zone-Based Installation Cost Calculator
//!
//! Maps a postal code to a department-level intervention zone and prices
//! the installation. Installation follows different rules than product
//! margining: everything here is already-final HT pricing, no coefficient
//! is ever applied.

use rust_decimal::Decimal;
use shared::QuoteError;
use shared::models::{InstallationQuote, InterventionZone};
use std::collections::BTreeMap;

/// Width covered by the zone's flat base price.
pub const INSTALL_BASE_WIDTH_MM: u32 = 6000;

/// Resolve a postal code to its covered intervention zone.
///
/// # Errors
/// - [`QuoteError::InvalidPostalCode`] when the input is not exactly 5
///   ASCII digits
/// - [`QuoteError::ZoneNotCovered`] when the department is unlisted or
///   toggled off: a valid code outside coverage is never defaulted to a
///   covered zone
pub fn lookup_zone<'a>(
    postal_code: &str,
    zones: &'a BTreeMap<String, InterventionZone>,
) -> Result<(String, &'a InterventionZone), QuoteError> {
    if postal_code.len() != 5 || !postal_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QuoteError::InvalidPostalCode(postal_code.to_string()));
    }

    let department = postal_code[..2].to_string();
    match zones.get(&department) {
        Some(zone) if zone.available => Ok((department, zone)),
        _ => Err(QuoteError::ZoneNotCovered(department)),
    }
}

/// Whole surplus meters billed above the 6 m base width. Always rounds up:
/// a 6001 mm store is billed one full surplus meter.
pub fn surplus_meters(width_mm: u32) -> u32 {
    if width_mm <= INSTALL_BASE_WIDTH_MM {
        0
    } else {
        (width_mm - INSTALL_BASE_WIDTH_MM).div_ceil(1000)
    }
}

/// Price the installation for one postal code and width.
///
/// An uncovered department is a normal answer (`available: false`), not an
/// error; only a malformed postal code fails.
pub fn calculate_installation_cost(
    width_mm: u32,
    postal_code: &str,
    zones: &BTreeMap<String, InterventionZone>,
) -> Result<InstallationQuote, QuoteError> {
    let (department, zone) = match lookup_zone(postal_code, zones) {
        Ok(found) => found,
        Err(QuoteError::ZoneNotCovered(department)) => {
            return Ok(InstallationQuote::not_covered(department));
        }
        Err(err) => return Err(err),
    };

    let base_install_ht = zone.base_install_ht
        + Decimal::from(surplus_meters(width_mm)) * zone.per_extra_meter_ht;

    Ok(InstallationQuote::covered(
        department,
        zone.name.clone(),
        zone.lead_time.clone(),
        base_install_ht,
        zone.travel_surcharge_ht,
    ))
}

// ==================== Tests ====================
