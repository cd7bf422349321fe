//! Temporary migrated databases.

use tempfile::TempDir;

use crate::adapter::outbound::sqlite::{create_pool, enable_wal, run_migrations, DbPool};
use crate::infrastructure::config::pool::PoolConfig;

/// A migrated WAL-mode pool over a file in a fresh temp directory.
///
/// Keep the returned [`TempDir`] alive for as long as the pool is used.
pub fn temp_pool(name: &str) -> (TempDir, DbPool) {
    temp_pool_with(name, &PoolConfig::default())
}

pub fn temp_pool_with(name: &str, config: &PoolConfig) -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(format!("{name}.db"));
    let pool = create_pool(path.to_str().expect("utf-8 temp path"), config).expect("create pool");
    enable_wal(&pool).expect("enable WAL");
    run_migrations(&pool).expect("run migrations");
    (dir, pool)
}
