//! SQLite persistence adapters.
//!
//! Provides SQLite-backed implementations of the catalog and ledger ports
//! using Diesel ORM.

pub mod catalog;
pub mod database;
pub mod ledger;

pub use catalog::SqliteCatalogStore;
pub use database::connection::{create_pool, enable_wal, run_migrations, DbPool};
pub use ledger::SqliteLedger;
