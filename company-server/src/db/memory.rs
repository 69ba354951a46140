//! In-memory company store for tests and local development
//!
//! Same contract as the PostgreSQL repo: ids start at 1, are never
//! reused, and listing follows id order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{CompanyStore, DbError};
use crate::models::{Company, CompanyPayload, ListParams};

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Company>,
}

/// Company store held in process memory
#[derive(Debug, Default)]
pub struct MemoryCompanyStore {
    inner: RwLock<Inner>,
}

impl MemoryCompanyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyStore for MemoryCompanyStore {
    async fn list(&self, page: ListParams) -> Result<Vec<Company>, DbError> {
        let inner = self.inner.read().await;
        let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        Ok(inner.rows.values().skip(skip).take(limit).cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Company>, DbError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, payload: CompanyPayload) -> Result<Company, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let company = Company {
            id: inner.last_id,
            name: payload.name,
            location: payload.location,
        };
        inner.rows.insert(company.id, company.clone());
        Ok(company)
    }

    async fn update(&self, id: i64, payload: CompanyPayload) -> Result<Option<Company>, DbError> {
        let mut inner = self.inner.write().await;
        let Some(found) = inner.rows.remove(&id) else {
            return Ok(None);
        };

        let company = found.replaced_with(payload);
        inner.rows.insert(id, company.clone());
        Ok(Some(company))
    }

    async fn delete(&self, id: i64) -> Result<Option<Company>, DbError> {
        Ok(self.inner.write().await.rows.remove(&id))
    }
}
