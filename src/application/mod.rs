//! Application services (use cases).
//!
//! These services sit between the inbound adapters and the storage ports:
//!
//! - [`catalog`] - catalog reads, offer creation and feed import
//! - [`account`] - player registration, login and balance changes
//! - [`wager`] - atomic wager placement
//! - [`projector`] - flat join rows to nested catalog aggregates

pub mod account;
pub mod catalog;
pub mod projector;
pub mod wager;

pub use account::AccountService;
pub use catalog::{CatalogService, ImportSummary};
pub use wager::WagerService;
