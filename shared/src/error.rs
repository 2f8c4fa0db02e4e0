//! Pricing Error Taxonomy
//!
//! Every variant is a recoverable, user-facing condition: a pricing failure
//! degrades to "show the user why", never to a crashed request. Nothing here
//! is retried: the engine is deterministic, an identical call yields an
//! identical failure.

use crate::models::OptionKey;

/// Errors returned by the pricing & configuration resolution engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// No model with this id/slug in the catalog snapshot.
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Projection value not defined for this model. Projections are exact
    /// keys: there is no interpolation or next-bracket fallback.
    #[error("projection {projection_mm}mm is not available on model {model}")]
    UnknownProjection { model: String, projection_mm: u32 },

    /// No price tier accommodates the requested width at this projection.
    /// The dimensions are unavailable: not free, not zero.
    #[error(
        "no price tier covers width {width_mm}mm at projection {projection_mm}mm for model {model}"
    )]
    OutOfRange {
        model: String,
        projection_mm: u32,
        width_mm: u32,
    },

    /// Malformed postal code (expected exactly 5 digits). Distinct from an
    /// uncovered zone.
    #[error("invalid postal code '{0}': expected 5 digits")]
    InvalidPostalCode(String),

    /// Valid postal code, but the department has no installation coverage.
    #[error("no installation coverage for department {0}")]
    ZoneNotCovered(String),

    /// The selected option is not supported by the model's capability flags.
    #[error("option {option:?} is not compatible with model {model}")]
    IncompatibleOption { model: String, option: OptionKey },
}
