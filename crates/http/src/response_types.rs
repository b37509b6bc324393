//! Response types (Serialize).

use docgate_core::PageMeta;
use serde::Serialize;
use serde_json::Value;

/// Page-mode payload.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub page: u64,
    pub per_page: u64,
    pub page_count: u64,
    pub total_count: u64,
    pub records: Vec<Value>,
}

impl PageResponse {
    pub fn from_parts(meta: PageMeta, records: Vec<Value>) -> Self {
        Self {
            page: meta.page,
            per_page: meta.per_page,
            page_count: meta.page_count,
            total_count: meta.total_count,
            records,
        }
    }
}

/// Legacy window payload. Field names differ from page mode on purpose;
/// the two modes must not be conflated.
#[derive(Debug, Serialize)]
pub struct WindowResponse {
    pub start: u64,
    pub count: u64,
    pub total: u64,
    pub total_pages: u64,
    pub data: Vec<Value>,
}

impl WindowResponse {
    pub fn from_parts(meta: PageMeta, data: Vec<Value>) -> Self {
        Self {
            start: meta.page,
            count: meta.per_page,
            total: meta.total_count,
            total_pages: meta.page_count,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
