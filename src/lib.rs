//! Wagerbook - sports-wagering catalog and player ledger on SQLite.
//!
//! The catalog (leagues, sections, markets, offers and their prices) is
//! stored as normalized rows and rebuilt into nested aggregates on every
//! read. The ledger holds players and the wager legs they place; placement
//! checks funds and per-leg payout limits and commits legs and the balance
//! debit in one exclusive transaction.
//!
//! # Architecture
//!
//! ```text
//! adapter::inbound::cli ──► application services ──► port::outbound
//!                                                        ▲
//!                                  adapter::outbound::sqlite
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Catalog, player and wager types with validation rules
//! - [`application`] - Catalog, account and wager services plus the projector
//! - [`port`] - Storage traits the services depend on
//! - [`adapter`] - SQLite stores and the command-line surface
//! - [`infrastructure`] - Configuration, logging and service wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use wagerbook::domain::{LegSelection, NewPlayer, WagerRequest};
//! use wagerbook::infrastructure::{bootstrap, config::Config};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> wagerbook::error::Result<()> {
//! let services = bootstrap::build(&Config::default())?;
//! let player = services.accounts.create_player(&NewPlayer::new("ana", "secret"))?;
//! services.accounts.deposit(player.id, Decimal::new(50, 0))?;
//!
//! let request = WagerRequest::new(Decimal::TEN, vec![LegSelection::new(1, "X")]);
//! let placed = services.wagers.place(player.id, &request)?;
//! println!("balance after wager: {}", placed.balance_after);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(test)]
pub(crate) mod testkit;
