//! Persistence ports for the catalog and the player ledger.
//!
//! All operations block the calling thread until storage answers; callers
//! that run on an async runtime should move them onto a blocking pool.

use chrono::{DateTime, Utc};

use crate::domain::{
    Amount, NewPlayer, NewWagerLeg, OfferId, Odds, Offer, Player, PlayerId, Price, WagerLeg,
};
use crate::error::Result;

/// One row of the league ⟕ section ⟕ market join.
///
/// The section and market columns are `None` when the league has no
/// sections yet or the section has no markets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueRow {
    pub league: String,
    pub section_id: Option<i32>,
    pub offer_ids: Option<Vec<OfferId>>,
    pub market: Option<String>,
}

/// One row of the offer ⟕ price join. `price` is `None` for an offer
/// without prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRow {
    pub id: OfferId,
    pub code: String,
    pub name: String,
    pub scheduled_at: DateTime<Utc>,
    pub tv_channel: Option<String>,
    pub has_stats: bool,
    pub price: Option<Price>,
}

/// Catalog write path used by ingestion and flat read path used by the projector.
pub trait CatalogStore: Send + Sync {
    /// Insert a league, or return the id of the existing league with this name.
    fn insert_league(&self, name: &str) -> Result<i32>;

    /// Insert a section under a league. Returns the new section id.
    fn insert_section(&self, league_id: i32, offer_ids: &[OfferId]) -> Result<i32>;

    /// Insert a market name under a section.
    fn insert_market(&self, section_id: i32, name: &str) -> Result<()>;

    /// Insert an offer together with its nested prices, atomically.
    fn insert_offer(&self, offer: &Offer) -> Result<()>;

    /// Insert a price for an existing offer.
    fn insert_price(&self, offer_id: OfferId, price: &Price) -> Result<()>;

    /// Flat league rows ordered by (league name, section id, market name).
    fn league_rows(&self) -> Result<Vec<LeagueRow>>;

    /// Flat offer rows, optionally restricted to one offer id.
    fn offer_rows(&self, offer_id: Option<OfferId>) -> Result<Vec<OfferRow>>;
}

/// Operations available while the ledger write lock is held.
pub trait LedgerTransaction {
    fn player(&mut self, id: PlayerId) -> Result<Option<Player>>;

    fn set_balance(&mut self, id: PlayerId, balance: Amount) -> Result<()>;

    /// Current price for an (offer, market) pair.
    fn price(&mut self, offer_id: OfferId, market: &str) -> Result<Option<Odds>>;

    fn insert_leg(&mut self, leg: &NewWagerLeg) -> Result<()>;

    /// Delete every leg of a player. Returns the number removed.
    fn delete_legs(&mut self, player_id: PlayerId) -> Result<usize>;

    /// Delete a player row. Returns false if no such player existed.
    fn delete_player(&mut self, id: PlayerId) -> Result<bool>;
}

/// Storage operations for players and their wager legs.
pub trait LedgerStore: Send + Sync {
    fn create_player(&self, player: &NewPlayer) -> Result<Player>;

    /// All players ordered by id.
    fn players(&self) -> Result<Vec<Player>>;

    fn player(&self, id: PlayerId) -> Result<Option<Player>>;

    fn player_by_username(&self, username: &str) -> Result<Option<Player>>;

    /// Replace a player's password. Returns false if the username is unknown.
    fn set_password(&self, username: &str, password: &str) -> Result<bool>;

    /// Legs recorded for a player in insertion order.
    fn wager_legs(&self, player_id: PlayerId) -> Result<Vec<WagerLeg>>;

    /// Run `f` inside one exclusive write transaction.
    ///
    /// The lock is taken before `f` reads anything, so balance checks and
    /// the writes that depend on them cannot interleave with another
    /// locked section. Any error returned by `f` rolls everything back.
    fn locked<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn LedgerTransaction) -> Result<T>;
}
