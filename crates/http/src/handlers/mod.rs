//! HTTP route handlers.

pub mod collections;
pub mod documents;
