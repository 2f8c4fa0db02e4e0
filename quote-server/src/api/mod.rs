//! API route modules
//!
//! - [`health`] - liveness check
//! - [`quotes`] - configuration pricing endpoint
//! - [`catalog`] - model listings and chat-assistant summaries
//! - [`zones`] - installation coverage and cost estimates
//! - [`coefficients`] - admin surface for the pricing configuration

pub mod catalog;
pub mod coefficients;
pub mod health;
pub mod quotes;
pub mod zones;

use crate::core::ServerState;
use axum::Router;

/// Compose the per-module routers into the application router.
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(quotes::router())
        .merge(catalog::router())
        .merge(zones::router())
        .merge(coefficients::router())
}
