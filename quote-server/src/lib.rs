//! Storal Quote Server - awning configuration & pricing engine
//!
//! # Architecture overview
//!
//! - **Pricing engine** (`pricing`): tiered price resolution, option
//!   surcharges, per-line margining, VAT, zone-based installation cost.
//!   Pure functions over immutable catalog snapshots.
//! - **Catalog** (`catalog`): JSON document loading, load-time invariant
//!   validation, in-memory snapshot service.
//! - **HTTP API** (`api`): quotes, catalog summaries, zone checks, admin
//!   coefficients.
//!
//! # Module structure
//!
//! ```text
//! quote-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── catalog/       # Catalog loading and snapshots
//! ├── pricing/       # The pricing & configuration resolution engine
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use catalog::{Catalog, CatalogService};
pub use core::{Config, Server, ServerState};
pub use pricing::{QuoteRequest, build_quote};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   _____ __                  __
  / ___// /_____  _________ _/ /
  \__ \/ __/ __ \/ ___/ __ `/ /
 ___/ / /_/ /_/ / /  / /_/ / /
/____/\__/\____/_/   \__,_/_/
   quote server
    "#
    );
}
