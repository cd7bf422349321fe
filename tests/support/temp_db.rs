use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use wagerbook::adapter::outbound::sqlite::{
    create_pool, enable_wal, run_migrations, DbPool, SqliteCatalogStore, SqliteLedger,
};
use wagerbook::infrastructure::bootstrap::Services;
use wagerbook::infrastructure::config::pool::PoolConfig;
use wagerbook::infrastructure::config::Config;

/// Temporary migrated SQLite database for integration tests.
///
/// The file lives in its own temp directory, removed on drop.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        Self::with_pool_config(name, &PoolConfig::default())
    }

    pub fn with_pool_config(name: &str, config: &PoolConfig) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(format!("wagerbook-{name}.db"));

        let pool = create_pool(path.to_str().expect("utf-8 path"), config)
            .expect("create sqlite pool");
        // WAL mode improves concurrent writer behavior in tests.
        enable_wal(&pool).expect("enable WAL mode");
        run_migrations(&pool).expect("run migrations");

        Self { dir, path, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn catalog_store(&self) -> Arc<SqliteCatalogStore> {
        Arc::new(SqliteCatalogStore::new(self.pool.clone()))
    }

    pub fn ledger(&self) -> Arc<SqliteLedger> {
        Arc::new(SqliteLedger::new(self.pool.clone()))
    }

    /// Services over this database with the default configuration.
    pub fn services(&self) -> Services {
        self.services_with(&Config::default())
    }

    pub fn services_with(&self, config: &Config) -> Services {
        Services::from_pool(self.pool.clone(), config)
    }
}
