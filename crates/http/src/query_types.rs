//! Request/query types (Deserialize).

use docgate_core::{DEFAULT_PAGE, DEFAULT_PER_PAGE, QueryPlan, plan_page, plan_window};
use serde::Deserialize;

const fn default_page() -> u64 {
    DEFAULT_PAGE
}

const fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

/// Page-mode query: `?page=2&per_page=50`.
///
/// Fields are unsigned, so negative input is rejected at deserialization;
/// non-integer input is rejected the same way.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl PageQuery {
    pub fn plan(&self) -> QueryPlan {
        plan_page(Some(self.page), Some(self.per_page))
    }
}

/// Legacy window query: `?collection=reports&start=40&count=20`.
///
/// `start` and `count` stay raw strings so the planner can apply the
/// all-or-nothing default fallback instead of the framework rejecting
/// non-integer values outright.
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub collection: String,
    pub start: Option<String>,
    pub count: Option<String>,
}

impl WindowQuery {
    pub fn plan(&self) -> QueryPlan {
        plan_window(self.start.as_deref(), self.count.as_deref())
    }
}
