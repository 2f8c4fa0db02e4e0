//! Utility module - common types and infrastructure
//!
//! - [`AppError`] / [`AppResponse`] - HTTP error mapping and response envelope
//! - [`AppResult`] - handler result alias
//! - `logger` - tracing setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, AppResponse, ok, ok_with_message};
pub use result::AppResult;
