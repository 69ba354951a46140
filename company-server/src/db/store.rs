//! The company gateway seam
//!
//! Handlers only see [`CompanyStore`]. PostgreSQL ([`super::CompanyRepo`])
//! backs production, [`super::MemoryCompanyStore`] backs tests and
//! local development.

use async_trait::async_trait;

use crate::models::{Company, CompanyPayload, ListParams};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Row-level operations on companies.
///
/// "Not found" is `Ok(None)`; `Err` is reserved for store faults.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Companies in id order, skipping `page.skip()` and returning at most `page.limit()`.
    async fn list(&self, page: ListParams) -> Result<Vec<Company>, DbError>;

    /// A single company by id.
    async fn get(&self, id: i64) -> Result<Option<Company>, DbError>;

    /// Insert a company; the store assigns the id.
    async fn create(&self, payload: CompanyPayload) -> Result<Company, DbError>;

    /// Overwrite name and location. No side effects when the id is absent.
    async fn update(&self, id: i64, payload: CompanyPayload) -> Result<Option<Company>, DbError>;

    /// Remove a company, returning the row as it was before removal.
    async fn delete(&self, id: i64) -> Result<Option<Company>, DbError>;

    /// Check that the store can serve requests.
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
