//! Document store trait abstraction.
//!
//! The gateway treats the database as an opaque query engine: check that a
//! collection exists, and run a skip/limit scan that also reports the
//! pre-limit total. Backends: PostgreSQL (production), in-memory (tests).

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StorageError;

/// One page of documents plus the full match count.
///
/// `total_count` is the number of documents in the collection before skip
/// and limit were applied, queried fresh per request — the store is the
/// source of truth, nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPage {
    /// Documents in the window, in stable collection order.
    pub records: Vec<Value>,
    /// Pre-limit total number of documents in the collection.
    pub total_count: u64,
}

/// Read-only operations the gateway needs from a document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Whether a collection with this name exists in the store.
    async fn collection_exists(&self, name: &str) -> Result<bool, StorageError>;

    /// Scan `collection`, skip `skip` documents, return up to `limit`
    /// more, together with the pre-limit total count.
    async fn fetch_page(
        &self,
        collection: &str,
        skip: u64,
        limit: u64,
    ) -> Result<DocumentPage, StorageError>;
}
