//! Shared data models for the Storal quote engine
//!
//! This crate holds the wire-level types exchanged between the quote server
//! and its callers (REST clients, the chat assistant, admin tooling):
//!
//! - **Catalog** (`models::store_model`, `models::options`, `models::zone`):
//!   store models, price tiers, option catalog, intervention zones
//! - **Pricing configuration** (`models::pricing_config`): margin
//!   coefficients and VAT rates, loaded once and passed by reference
//! - **Quote output** (`models::quote`): the itemized `QuoteBreakdown`
//! - **Error taxonomy** (`error`): recoverable, user-facing pricing errors
//!
//! All monetary amounts are `rust_decimal::Decimal` in euros HT unless the
//! field name says otherwise; serialization uses plain JSON numbers.

pub mod error;
pub mod models;

pub use error::QuoteError;
