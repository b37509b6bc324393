//! Storage layer for docgate.
//!
//! Defines the [`DocumentStore`] trait — the gateway's view of the
//! underlying document database — plus a PostgreSQL backend for production
//! and an in-memory backend for tests and local runs.

mod error;
mod memory;
mod migrations;
mod pg_store;
mod traits;

pub use error::StorageError;
pub use memory::MemoryDocumentStore;
pub use pg_store::PgDocumentStore;
pub use traits::{DocumentPage, DocumentStore};
