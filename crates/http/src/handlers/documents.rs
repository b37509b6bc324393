//! Legacy window-mode reads, kept for older clients.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::WindowQuery;
use crate::response_types::WindowResponse;

/// Deliver a window of documents from a collection.
///
/// `start` and `count` must both be integers; otherwise both fall back to
/// `0` and `100`. The payload uses the legacy field names
/// (`start`/`count`/`total`/`total_pages`/`data`).
pub async fn read_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<WindowResponse>, ApiError> {
    let plan = query.plan();
    let page = state.read_service.fetch_page(&query.collection, &plan).await?;
    let meta = plan.assemble(page.total_count);
    Ok(Json(WindowResponse::from_parts(meta, page.records)))
}
