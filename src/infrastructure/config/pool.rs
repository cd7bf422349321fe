//! Database connection pool configuration.

use serde::Deserialize;

/// SQLite connection pool configuration.
///
/// Checkout and lock waits are the only deadlines in the ledger: a request
/// that cannot get a connection within `connection_timeout_secs`, or the
/// write lock within `busy_timeout_ms`, fails instead of blocking forever.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_size")]
    pub max_size: u32,
    /// How long a caller waits for a free connection (seconds).
    #[serde(default = "default_connection_timeout_secs")]
    pub connection_timeout_secs: u64,
    /// How long SQLite waits for a locked database (milliseconds).
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

const fn default_max_size() -> u32 {
    8
}

const fn default_connection_timeout_secs() -> u64 {
    5
}

const fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            connection_timeout_secs: default_connection_timeout_secs(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}
