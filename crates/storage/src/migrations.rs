//! PostgreSQL schema migrations for docgate storage.

use anyhow::Result;
use sqlx::PgPool;

/// Run all PostgreSQL migrations. Idempotent; executed at pool init.
pub(crate) async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS collections (
            name TEXT PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id BIGSERIAL PRIMARY KEY,
            collection TEXT NOT NULL REFERENCES collections(name),
            doc JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents (collection, id)")
        .execute(pool)
        .await?;

    Ok(())
}
