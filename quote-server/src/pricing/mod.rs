//! Pricing & Configuration Resolution Engine
//!
//! The only part of the system with real business-rule complexity. Pure,
//! side-effect-free computation over an immutable catalog snapshot:
//!
//! - `resolver`: tiered base price lookup
//! - `options`: purchase-side option surcharges
//! - `margin`: per-line margin coefficients and VAT
//! - `installation`: zone-based installation cost
//! - `quote`: aggregation into a [`shared::models::QuoteBreakdown`]
//!
//! Concurrent callers may price in parallel with no locking: nothing here
//! mutates shared state, and each call works on the snapshot it was handed.

mod installation;
mod margin;
mod options;
mod quote;
mod resolver;

pub use installation::*;
pub use margin::*;
pub use options::*;
pub use quote::*;
pub use resolver::*;

#[cfg(test)]
pub(crate) mod testutil;
