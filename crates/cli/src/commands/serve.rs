use std::sync::Arc;

use anyhow::Result;
use docgate_core::GatewayConfig;
use docgate_http::{AppState, create_router};
use docgate_service::{CollectionRegistry, ReadService};
use docgate_storage::PgDocumentStore;

/// Connect to the store, validate the allow-list, and serve.
///
/// A configuration error (missing env, unknown collection) is fatal here,
/// before the listener binds — the process never serves a request with a
/// bad allow-list.
pub(crate) async fn run(
    mut config: GatewayConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let store = Arc::new(PgDocumentStore::new(&config.database_url).await?);
    let registry = CollectionRegistry::load(&config.collections, store.as_ref()).await?;
    let read_service = ReadService::new(registry, store);

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState { config, read_service });
    let router = create_router(state);
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
