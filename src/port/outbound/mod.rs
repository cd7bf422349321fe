//! Outbound ports (driven side): interfaces implemented by storage adapters.

pub mod store;

pub use store::{CatalogStore, LeagueRow, LedgerStore, LedgerTransaction, OfferRow};
