use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL connection pool and makes sure the schema exists.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    ensure_schema(&pool).await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Idempotent schema setup for documents and stored match reports.
async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id UUID PRIMARY KEY,
            kind TEXT NOT NULL CHECK (kind IN ('resume', 'job_description')),
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create documents table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS match_analyses (
            id UUID PRIMARY KEY,
            resume_id UUID NOT NULL REFERENCES documents(id) ON DELETE CASCADE,
            job_description_id UUID NOT NULL REFERENCES documents(id) ON DELETE CASCADE,
            scorer_backend TEXT NOT NULL,
            report JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create match_analyses table")?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_match_analyses_pair ON match_analyses(resume_id, job_description_id)",
    )
    .execute(pool)
    .await
    .context("Failed to create match_analyses index")?;

    Ok(())
}
