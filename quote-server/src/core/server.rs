//! HTTP server
//!
//! Composes the per-module API routers, applies the shared middleware
//! layers and serves until shutdown.

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::core::{Config, ServerState};

pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind and serve the HTTP API. Returns when the listener fails or the
    /// process is shut down.
    pub async fn run(self) -> anyhow::Result<()> {
        let app = api::router()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state);

        let addr = ("0.0.0.0", self.config.http_port);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(port = self.config.http_port, "quote server listening");

        axum::serve(listener, app).await?;
        Ok(())
    }
}
