//! Canonical test configurations.

use crate::infrastructure::config::pool::PoolConfig;
use crate::infrastructure::config::Config;

/// Pool config with `max_size` connections and a short checkout timeout.
pub fn pool(max_size: u32) -> PoolConfig {
    PoolConfig {
        max_size,
        connection_timeout_secs: 1,
        ..PoolConfig::default()
    }
}

/// Default config pointed at `database`.
pub fn with_database(database: &str) -> Config {
    Config {
        database: database.to_string(),
        ..Config::default()
    }
}
