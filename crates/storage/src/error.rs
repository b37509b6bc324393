//! Typed error enum for the storage layer.
//!
//! Lets callers match on concrete failure modes instead of downcasting
//! opaque boxes; the http crate maps these onto response codes.

use thiserror::Error;

/// Storage-layer error covering the expected failure modes.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be read back as a JSON document.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Schema migration failure at pool init.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient. Nothing in the gateway
    /// retries, but operators grepping logs care about the distinction.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON document deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_transient() {
        assert!(StorageError::Database(sqlx::Error::PoolTimedOut).is_transient());
    }

    #[test]
    fn migration_and_corruption_failures_are_not_transient() {
        assert!(!StorageError::Migration("boom".to_owned()).is_transient());
        let corrupt = StorageError::from(
            serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
        );
        assert!(!corrupt.is_transient());
    }
}
