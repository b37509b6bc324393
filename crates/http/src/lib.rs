//! HTTP API server for docgate.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod auth;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use docgate_core::GatewayConfig;
use docgate_service::ReadService;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Read-only after startup; shared across requests behind `Arc`.
pub struct AppState {
    /// Gateway configuration (auth identity lives here).
    pub config: GatewayConfig,
    /// Allow-list gated read operations.
    pub read_service: ReadService,
}

/// Build the router.
///
/// The collection routes sit behind the basic-auth gate; `/health` and
/// `/api/version` stay open for liveness probes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/collections", get(handlers::collections::list_collections))
        .route("/collections/{collection}", get(handlers::collections::read_collection))
        .route("/documents", get(handlers::documents::read_documents))
        .route_layer(middleware::from_fn_with_state(Arc::clone(&state), auth::require_basic_auth))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
