//! company-server: HTTP API for company records
//!
//! Two layers, composed linearly:
//! - [`db`]: the persistence gateway (list/get/create/update/delete)
//! - [`http`]: axum routes mapping requests onto the gateway
//!
//! Startup builds one [`db::CompanyStore`] and injects it into every
//! handler through [`AppState`].

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{CompanyRepo, CompanyStore, DbError, MemoryCompanyStore};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use models::{Company, CompanyPayload, ListParams};
pub use state::AppState;
