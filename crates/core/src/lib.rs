//! Core domain logic for docgate.
//!
//! Pure, dependency-light pieces shared by every other crate: the immutable
//! gateway configuration, the basic-auth allow/deny decision, and the
//! pagination planner with its page-metadata math.

mod auth;
mod config;
mod constants;
mod env;
mod pagination;

pub use auth::{AuthDecision, Credentials, DenyReason, authenticate};
pub use config::{ConfigError, GatewayConfig};
pub use constants::{
    DEFAULT_HOST, DEFAULT_PAGE, DEFAULT_PER_PAGE, DEFAULT_PORT, LEGACY_DEFAULT_COUNT,
    LEGACY_DEFAULT_START, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};
pub use env::env_parse_with_default;
pub use pagination::{PageMeta, QueryPlan, plan_page, plan_window};
