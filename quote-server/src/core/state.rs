//! Server state - shared references to the loaded services
//!
//! `ServerState` is cloned per request (cheap `Arc` copies). The catalog
//! snapshot is immutable; the pricing configuration is swapped whole by
//! the admin coefficients endpoint.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::{CatalogService, load_catalog, load_pricing_config};
use crate::core::Config;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub catalog: Arc<CatalogService>,
}

impl ServerState {
    /// Load the catalog documents and build the shared state.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        let dir = Path::new(&config.catalog_dir);
        let catalog = load_catalog(dir)?;
        let pricing = load_pricing_config(dir)?;

        Ok(Self {
            config: Arc::new(config.clone()),
            catalog: Arc::new(CatalogService::new(catalog, pricing)),
        })
    }

    /// Build state from already-constructed parts (tests).
    pub fn with_catalog(config: Config, catalog: CatalogService) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}
