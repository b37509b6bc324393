//! Typed error enum for the service layer.

use docgate_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying registry and storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Requested collection is not on the configured allow-list.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// Startup allow-list validation failed. Fatal: the process must not
    /// start serving traffic.
    #[error("Invalid service configuration. Unknown collection: {0}")]
    InvalidConfiguration(String),

    /// The store rejected the query.
    #[error("query failed: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Whether this error was caused by the caller's input rather than
    /// the gateway or the store being unhealthy.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnknownCollection(_))
    }
}
