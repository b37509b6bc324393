//! Read operations: allow-list gate, then a skip/limit scan.

use std::sync::Arc;

use docgate_core::QueryPlan;
use docgate_storage::{DocumentPage, DocumentStore};

use crate::error::ServiceError;
use crate::registry::CollectionRegistry;

/// Executes paginated reads against allow-listed collections.
pub struct ReadService {
    registry: CollectionRegistry,
    store: Arc<dyn DocumentStore>,
}

impl ReadService {
    #[must_use]
    pub fn new(registry: CollectionRegistry, store: Arc<dyn DocumentStore>) -> Self {
        Self { registry, store }
    }

    /// Configured collection names, in configured order.
    pub fn collections(&self) -> &[String] {
        self.registry.names()
    }

    /// Run the plan against a collection.
    ///
    /// The registry check comes first: an unconfigured name never reaches
    /// the store.
    pub async fn fetch_page(
        &self,
        collection: &str,
        plan: &QueryPlan,
    ) -> Result<DocumentPage, ServiceError> {
        if !self.registry.contains(collection) {
            return Err(ServiceError::UnknownCollection(collection.to_owned()));
        }
        Ok(self.store.fetch_page(collection, plan.skip, plan.limit).await?)
    }
}
