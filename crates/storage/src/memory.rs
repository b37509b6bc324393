//! In-memory document store for tests and local runs without PostgreSQL.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{DocumentPage, DocumentStore};

/// Document store holding collections in process memory.
///
/// Insertion order within a collection is the scan order, matching the
/// stable `ORDER BY id` ordering of the PostgreSQL backend.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<Value>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection if it does not exist.
    pub async fn create_collection(&self, name: &str) {
        self.collections.write().await.entry(name.to_owned()).or_default();
    }

    /// Append a document to a collection, creating the collection if needed.
    pub async fn insert(&self, collection: &str, doc: Value) {
        self.collections.write().await.entry(collection.to_owned()).or_default().push(doc);
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn collection_exists(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.collections.read().await.contains_key(name))
    }

    async fn fetch_page(
        &self,
        collection: &str,
        skip: u64,
        limit: u64,
    ) -> Result<DocumentPage, StorageError> {
        let collections = self.collections.read().await;
        let docs = collections.get(collection).map(Vec::as_slice).unwrap_or_default();
        let total_count = docs.len() as u64;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let records = docs.iter().skip(skip).take(limit).cloned().collect();
        Ok(DocumentPage { records, total_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn exists_only_after_creation() {
        let store = MemoryDocumentStore::new();
        assert!(!store.collection_exists("reports").await.unwrap());
        store.create_collection("reports").await;
        assert!(store.collection_exists("reports").await.unwrap());
    }

    #[tokio::test]
    async fn fetch_page_windows_and_counts() {
        let store = MemoryDocumentStore::new();
        for i in 0..7 {
            store.insert("reports", json!({ "n": i })).await;
        }
        let page = store.fetch_page("reports", 2, 3).await.unwrap();
        assert_eq!(page.total_count, 7);
        assert_eq!(page.records, vec![json!({"n": 2}), json!({"n": 3}), json!({"n": 4})]);
    }

    #[tokio::test]
    async fn fetch_page_past_the_end_is_empty_with_full_count() {
        let store = MemoryDocumentStore::new();
        store.insert("reports", json!({"n": 0})).await;
        let page = store.fetch_page("reports", 100, 10).await.unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.total_count, 1);
    }

    #[tokio::test]
    async fn empty_collection_yields_zero_total() {
        let store = MemoryDocumentStore::new();
        store.create_collection("empty").await;
        let page = store.fetch_page("empty", 0, 100).await.unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.total_count, 0);
    }
}
