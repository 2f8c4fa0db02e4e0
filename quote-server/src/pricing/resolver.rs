//! Tiered Base Price Resolver
//!
//! Resolves a model + projection + width to the purchase-side base price.
//! Projections are exact keys; widths round up to the smallest tier that
//! accommodates them (boundary inclusive).

use rust_decimal::Decimal;
use shared::QuoteError;
use shared::models::StoreModel;

/// Resolve the base purchase price HT for the requested dimensions.
///
/// # Errors
/// - [`QuoteError::UnknownProjection`] when the projection is not a defined
///   grid key (no interpolation between projections)
/// - [`QuoteError::OutOfRange`] when no tier accommodates the width, or the
///   width is below the projection's minimum manufacturable width
pub fn resolve_base_price(
    model: &StoreModel,
    projection_mm: u32,
    width_mm: u32,
) -> Result<Decimal, QuoteError> {
    let tiers = model
        .buy_prices
        .get(&projection_mm)
        .ok_or_else(|| QuoteError::UnknownProjection {
            model: model.id.clone(),
            projection_mm,
        })?;

    if width_mm == 0 {
        return Err(out_of_range(model, projection_mm, width_mm));
    }

    if let Some(&min_width) = model.min_widths.get(&projection_mm)
        && width_mm < min_width
    {
        return Err(out_of_range(model, projection_mm, width_mm));
    }

    // Tier lists are validated ascending at catalog load, so the first
    // accommodating tier is the smallest one.
    tiers
        .iter()
        .find(|tier| tier.max_width_mm >= width_mm)
        .map(|tier| tier.purchase_price_ht)
        .ok_or_else(|| out_of_range(model, projection_mm, width_mm))
}

fn out_of_range(model: &StoreModel, projection_mm: u32, width_mm: u32) -> QuoteError {
    QuoteError::OutOfRange {
        model: model.id.clone(),
        projection_mm,
        width_mm,
    }
}

// ==================== Tests ====================
