//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - the command-line surface driving the application
//! - [`outbound`] - SQLite storage behind the catalog and ledger ports

pub mod inbound;
pub mod outbound;
