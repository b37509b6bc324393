//! Shared constants for docgate.
//!
//! Centralizes defaults that would otherwise be duplicated across crates.

/// First page when the caller does not specify one.
pub const DEFAULT_PAGE: u64 = 1;

/// Documents per page when the caller does not specify a size.
pub const DEFAULT_PER_PAGE: u64 = 100;

/// Legacy window mode: default skip when start/count are absent or invalid.
pub const LEGACY_DEFAULT_START: u64 = 0;

/// Legacy window mode: default window size when start/count are absent or invalid.
pub const LEGACY_DEFAULT_COUNT: u64 = 100;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default bind address for the HTTP listener.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port for the HTTP listener.
pub const DEFAULT_PORT: u16 = 8537;
