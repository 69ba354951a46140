//! Database layer - connection pool, schema and the company gateway
//!
//! # Design Principles
//!
//! - One pooled connection per operation, returned on drop
//! - Absence is `Ok(None)`, never an error
//! - Every write commits before the call returns

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryCompanyStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::CompanyRepo;
pub use store::{CompanyStore, DbError};

/// Connect to PostgreSQL, ensure the schema exists and return the gateway.
///
/// Run once at startup; the returned repo is cloned into the HTTP state.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<CompanyRepo, DbError> {
    let pool = create_pool_with_options(database_url, max_connections).await?;
    migrations::run(&pool).await?;
    Ok(CompanyRepo::new(pool))
}
