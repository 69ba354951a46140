//! Company repository
//!
//! - create: INSERT ... RETURNING (id assigned by BIGSERIAL)
//! - update/delete: look up, then act, on the same connection
//!
//! Update and delete are not wrapped in a transaction. Two concurrent
//! requests for the same id can both pass the look-up; the later write
//! wins and each caller reports from its own read. An update whose row
//! vanished after the look-up still returns the record it found, with
//! the new fields applied.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use crate::db::store::{CompanyStore, DbError};
use crate::models::{Company, CompanyPayload, ListParams};

/// PostgreSQL-backed company gateway
#[derive(Debug, Clone)]
pub struct CompanyRepo {
    pool: PgPool,
}

impl CompanyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

async fn find(conn: &mut PgConnection, id: i64) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, location FROM companies WHERE id = $1")
        .bind(id)
        .fetch_optional(conn)
        .await
}

#[async_trait]
impl CompanyStore for CompanyRepo {
    async fn list(&self, page: ListParams) -> Result<Vec<Company>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let companies: Vec<Company> = sqlx::query_as(
            r#"
            SELECT id, name, location
            FROM companies
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&mut *conn)
        .await?;

        Ok(companies)
    }

    async fn get(&self, id: i64) -> Result<Option<Company>, DbError> {
        let mut conn = self.pool.acquire().await?;
        Ok(find(&mut conn, id).await?)
    }

    async fn create(&self, payload: CompanyPayload) -> Result<Company, DbError> {
        let mut conn = self.pool.acquire().await?;

        let company: Company = sqlx::query_as(
            r#"
            INSERT INTO companies (name, location)
            VALUES ($1, $2)
            RETURNING id, name, location
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.location)
        .fetch_one(&mut *conn)
        .await?;

        tracing::debug!(id = company.id, "company created");
        Ok(company)
    }

    async fn update(&self, id: i64, payload: CompanyPayload) -> Result<Option<Company>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let Some(found) = find(&mut conn, id).await? else {
            return Ok(None);
        };

        let result = sqlx::query("UPDATE companies SET name = $2, location = $3 WHERE id = $1")
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.location)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "company removed between look-up and update");
        } else {
            tracing::debug!(id, "company updated");
        }
        Ok(Some(found.replaced_with(payload)))
    }

    async fn delete(&self, id: i64) -> Result<Option<Company>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let Some(company) = find(&mut conn, id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        tracing::debug!(id, "company deleted");
        Ok(Some(company))
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
