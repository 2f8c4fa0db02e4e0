//! Catalog and quote data models

mod options;
mod pricing_config;
mod quote;
mod store_model;
mod zone;

pub use options::*;
pub use pricing_config::*;
pub use quote::*;
pub use store_model::*;
pub use zone::*;
