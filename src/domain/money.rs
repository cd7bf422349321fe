//! Monetary types for odds and stake representation.

use rust_decimal::Decimal;

/// Decimal odds for one (offer, market) pair.
pub type Odds = Decimal;

/// Currency amount: balances, stakes and deposits.
pub type Amount = Decimal;

/// Offer identifier as assigned by the catalog feed.
pub type OfferId = i32;

/// Player identifier assigned on registration.
pub type PlayerId = i32;
