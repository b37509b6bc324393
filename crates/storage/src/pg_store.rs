//! PostgreSQL document store backend using sqlx.

// Pagination arithmetic is bounded by PostgreSQL row limits.
#![allow(
    clippy::arithmetic_side_effects,
    reason = "DB row counts and pagination are bounded by PostgreSQL limits"
)]

use async_trait::async_trait;
use docgate_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::migrations::run_migrations;
use crate::traits::{DocumentPage, DocumentStore};

/// Document store backed by a PostgreSQL pool.
///
/// Documents live in a single `documents` table keyed by collection name,
/// with a `collections` catalog table for existence checks.
#[derive(Clone, Debug)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Connect, tune the pool, and run migrations.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgDocumentStore initialized");
        Ok(Self { pool })
    }
}

/// sqlx binds i64; u64 window values beyond i64::MAX saturate rather
/// than wrap. A skip that large is past any real collection anyway.
fn u64_to_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn collection_exists(&self, name: &str) -> Result<bool, StorageError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM collections WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn fetch_page(
        &self,
        collection: &str,
        skip: u64,
        limit: u64,
    ) -> Result<DocumentPage, StorageError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query(
            "SELECT doc FROM documents WHERE collection = $1 ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(collection)
        .bind(u64_to_i64(limit))
        .bind(u64_to_i64(skip))
        .fetch_all(&self.pool)
        .await?;

        let records = rows
            .into_iter()
            .map(|row| row.try_get::<serde_json::Value, _>("doc").map_err(StorageError::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DocumentPage { records, total_count: total.max(0) as u64 })
    }
}
