//! Admin coefficients API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/admin/coefficients",
        get(handler::get_config).put(handler::update_config),
    )
}
