//! Schema creation, run once at startup

use sqlx::PgPool;

use super::DbError;

/// Ensure the companies table exists (create-if-absent, idempotent).
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring companies schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS companies (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            location TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_companies_name ON companies(name)")
        .execute(pool)
        .await?;

    tracing::info!("Companies schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn run_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");

        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = 'companies')",
        )
        .fetch_one(&pool)
        .await
        .expect("query failed");
        assert!(exists.0);
    }
}
