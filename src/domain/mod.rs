//! Storage-agnostic domain types and validation rules.

pub mod catalog;
pub mod error;
pub mod money;
pub mod player;
pub mod wager;

pub use catalog::{League, LeagueFeed, Market, Offer, Price, Section};
pub use money::{Amount, OfferId, Odds, PlayerId};
pub use player::{NewPlayer, Player};
pub use wager::{
    LegSelection, NewWagerLeg, PlacedWager, ResolvedLeg, WagerLeg, WagerRequest,
    DEFAULT_PAYOUT_CAP,
};
