//! Service layer for docgate.
//!
//! Sits between the HTTP handlers and the document store: validates the
//! collection allow-list at startup and gates every read through it.

mod error;
mod read_service;
mod registry;

pub use error::ServiceError;
pub use read_service::ReadService;
pub use registry::CollectionRegistry;
