//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and per-connection
//! pragmas for SQLite databases.

use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::infrastructure::config::pool::PoolConfig;

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A connection checked out of a [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Pragmas applied to every connection when the pool opens it.
///
/// Foreign keys are off by default in SQLite and must be enabled per
/// connection; the busy timeout bounds how long a writer waits for the lock.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    busy_timeout_ms: u64,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), diesel::r2d2::Error> {
        diesel::sql_query("PRAGMA foreign_keys = ON")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        diesel::sql_query(format!("PRAGMA busy_timeout = {}", self.busy_timeout_ms))
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        Ok(())
    }
}

/// Create a connection pool for the given database path.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(config.max_size)
        .connection_timeout(Duration::from_secs(config.connection_timeout_secs))
        .connection_customizer(Box::new(SqlitePragmas {
            busy_timeout_ms: config.busy_timeout_ms,
        }))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))?;
    debug!(database = database_url, max_size = config.max_size, "Created SQLite pool");
    Ok(pool)
}

/// Check a connection out of the pool.
///
/// # Errors
/// Returns [`Error::Connection`] when no connection frees up within the
/// pool's checkout timeout.
pub fn checkout(pool: &DbPool) -> Result<DbConnection> {
    pool.get().map_err(|e| Error::Connection(e.to_string()))
}

/// Switch the database file to write-ahead logging.
///
/// WAL lets readers proceed while a wager transaction holds the write lock.
///
/// # Errors
/// Returns an error if the pragma fails.
pub fn enable_wal(pool: &DbPool) -> Result<()> {
    let mut conn = checkout(pool)?;
    diesel::sql_query("PRAGMA journal_mode=WAL")
        .execute(&mut conn)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(())
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = checkout(pool)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Connection(e.to_string()))?;
    if !applied.is_empty() {
        info!(count = applied.len(), "Applied database migrations");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(diesel::QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[derive(diesel::QueryableByName)]
    struct ForeignKeys {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        foreign_keys: i32,
    }

    fn file_pool(dir: &TempDir) -> DbPool {
        let path = dir.path().join("test.db");
        create_pool(path.to_str().unwrap(), &PoolConfig::default()).unwrap()
    }

    #[test]
    fn create_pool_can_get_connection() {
        let dir = TempDir::new().unwrap();
        let pool = file_pool(&dir);
        assert!(checkout(&pool).is_ok());
    }

    #[test]
    fn run_migrations_creates_tables() {
        let dir = TempDir::new().unwrap();
        let pool = file_pool(&dir);
        run_migrations(&pool).unwrap();

        let mut conn = pool.get().unwrap();
        let tables: Vec<String> = diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name",
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

        assert_eq!(
            tables,
            vec![
                "leagues",
                "markets",
                "offers",
                "players",
                "prices",
                "sections",
                "wager_legs"
            ]
        );
    }

    #[test]
    fn run_migrations_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let pool = file_pool(&dir);

        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();
    }

    #[test]
    fn connections_enforce_foreign_keys() {
        let dir = TempDir::new().unwrap();
        let pool = file_pool(&dir);
        let mut conn = pool.get().unwrap();

        let row: ForeignKeys = diesel::sql_query("PRAGMA foreign_keys")
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(row.foreign_keys, 1);
    }

    #[test]
    fn pool_respects_max_size() {
        let dir = TempDir::new().unwrap();
        let pool = create_pool(
            dir.path().join("small.db").to_str().unwrap(),
            &crate::testkit::config::pool(2),
        )
        .unwrap();

        let _a = checkout(&pool).unwrap();
        let _b = checkout(&pool).unwrap();
        assert!(matches!(checkout(&pool), Err(Error::Connection(_))));
    }
}
