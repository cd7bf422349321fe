//! Composition root: opens the database and wires stores into services.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::sqlite::{
    create_pool, enable_wal, run_migrations, DbPool, SqliteCatalogStore, SqliteLedger,
};
use crate::application::{AccountService, CatalogService, WagerService};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Services backed by one SQLite pool.
pub struct Services {
    pub catalog: CatalogService<SqliteCatalogStore>,
    pub accounts: AccountService<SqliteLedger>,
    pub wagers: WagerService<SqliteLedger>,
}

impl Services {
    /// Wire services over an already migrated pool.
    #[must_use]
    pub fn from_pool(pool: DbPool, config: &Config) -> Self {
        let catalog = Arc::new(SqliteCatalogStore::new(pool.clone()));
        let ledger = Arc::new(SqliteLedger::new(pool));

        Self {
            catalog: CatalogService::new(catalog),
            accounts: AccountService::new(Arc::clone(&ledger)),
            wagers: WagerService::new(ledger, config.wager.payout_cap),
        }
    }
}

/// Open the configured database with WAL enabled and migrations applied.
///
/// # Errors
/// Returns an error if the pool cannot be created or a migration fails.
pub fn open_database(config: &Config) -> Result<DbPool> {
    let pool = create_pool(&config.database, &config.pool)?;
    enable_wal(&pool)?;
    run_migrations(&pool)?;
    info!(database = %config.database, "Database ready");
    Ok(pool)
}

/// Open the database and build every service.
///
/// # Errors
/// See [`open_database`].
pub fn build(config: &Config) -> Result<Services> {
    let pool = open_database(config)?;
    Ok(Services::from_pool(pool, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPlayer;
    use crate::testkit::config::with_database;
    use tempfile::TempDir;

    #[test]
    fn services_share_one_database() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.db");
        let config = with_database(path.to_str().unwrap());

        let services = build(&config).unwrap();
        let ana = services
            .accounts
            .create_player(&NewPlayer::new("ana", "pw"))
            .unwrap();

        let reopened = build(&config).unwrap();
        assert_eq!(reopened.accounts.player(ana.id).unwrap().username, "ana");
    }
}
