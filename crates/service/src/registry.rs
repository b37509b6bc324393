//! Collection allow-list, validated against the store at startup.

use docgate_storage::DocumentStore;

use crate::error::ServiceError;

/// The fixed set of collection names the gateway is permitted to expose.
///
/// Loaded once per process and never mutated; a name missing from the
/// registry is rejected on every request, not just at startup.
#[derive(Debug, Clone)]
pub struct CollectionRegistry {
    names: Vec<String>,
}

impl CollectionRegistry {
    /// Parse the configured comma-separated list and verify every entry
    /// against the store.
    ///
    /// Entries are trimmed; empties are dropped; duplicates keep their
    /// first position. The first name the store does not know aborts
    /// startup with an error naming it.
    pub async fn load(
        raw_list: &str,
        store: &dyn DocumentStore,
    ) -> Result<Self, ServiceError> {
        let mut names: Vec<String> = Vec::new();
        for candidate in raw_list.split(',').map(str::trim) {
            if candidate.is_empty() || names.iter().any(|n| n == candidate) {
                continue;
            }
            if !store.collection_exists(candidate).await? {
                return Err(ServiceError::InvalidConfiguration(candidate.to_owned()));
            }
            names.push(candidate.to_owned());
        }
        tracing::info!(collections = ?names, "collection registry loaded");
        Ok(Self { names })
    }

    /// Whether a collection is on the allow-list.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Configured collection names, in configured order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgate_storage::MemoryDocumentStore;

    async fn store_with(collections: &[&str]) -> MemoryDocumentStore {
        let store = MemoryDocumentStore::new();
        for name in collections {
            store.create_collection(name).await;
        }
        store
    }

    #[tokio::test]
    async fn loads_in_configured_order() {
        let store = store_with(&["beta", "alpha", "gamma"]).await;
        let registry = CollectionRegistry::load("gamma, alpha,beta", &store).await.unwrap();
        assert_eq!(registry.names(), ["gamma", "alpha", "beta"]);
    }

    #[tokio::test]
    async fn trims_drops_empties_and_dedupes() {
        let store = store_with(&["alpha", "beta"]).await;
        let registry =
            CollectionRegistry::load(" alpha ,, beta , alpha ,", &store).await.unwrap();
        assert_eq!(registry.names(), ["alpha", "beta"]);
    }

    #[tokio::test]
    async fn unknown_collection_aborts_load_with_its_name() {
        let store = store_with(&["alpha"]).await;
        let err = CollectionRegistry::load("alpha,ghost", &store).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidConfiguration(ref name) if name == "ghost"));
        assert!(err.to_string().contains("Unknown collection: ghost"));
    }

    #[tokio::test]
    async fn contains_only_configured_names() {
        let store = store_with(&["alpha", "beta"]).await;
        // beta exists in the store but is not configured
        let registry = CollectionRegistry::load("alpha", &store).await.unwrap();
        assert!(registry.contains("alpha"));
        assert!(!registry.contains("beta"));
    }
}
