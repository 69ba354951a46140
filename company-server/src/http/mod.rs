//! HTTP server layer
//!
//! Axum server with:
//! - Single-origin CORS with credentials
//! - Request tracing
//! - Graceful shutdown
//! - JSON error bodies under a `detail` key

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, cors_layer, run_server, ServerConfig, ServerError};
