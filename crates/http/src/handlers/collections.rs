//! Collection listing and page-mode reads.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::PageQuery;
use crate::response_types::PageResponse;

/// List the names of collections that can be queried, in configured order.
pub async fn list_collections(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.read_service.collections().to_vec())
}

/// Deliver one page of documents from a collection.
///
/// `page` defaults to the first page, `per_page` to 100.
pub async fn read_collection(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse>, ApiError> {
    let plan = query.plan();
    let page = state.read_service.fetch_page(&collection, &plan).await?;
    let meta = plan.assemble(page.total_count);
    Ok(Json(PageResponse::from_parts(meta, page.records)))
}
