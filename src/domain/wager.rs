//! Wager requests, recorded legs and the placement rules.
//!
//! A wager is one stake covering one or more legs. Each leg names an
//! (offer, market) pair; the price is resolved at placement time and copied
//! onto the recorded [`WagerLeg`], so later price changes never touch it.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::{Amount, OfferId, Odds, PlayerId};
use crate::error::WagerError;

/// Maximum potential winnings (stake x price) allowed per leg.
pub const DEFAULT_PAYOUT_CAP: Amount = Decimal::ONE_THOUSAND;

/// One (offer, market) selection of a wager request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegSelection {
    #[serde(alias = "ponuda")]
    pub offer_id: OfferId,
    #[serde(alias = "naziv")]
    pub market: String,
}

impl LegSelection {
    pub fn new(offer_id: OfferId, market: impl Into<String>) -> Self {
        Self {
            offer_id,
            market: market.into(),
        }
    }
}

impl fmt::Display for LegSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.offer_id, self.market)
    }
}

/// Parses `<offer_id>:<market>`, e.g. `1:X`.
impl FromStr for LegSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (offer, market) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <offer_id>:<market>, got '{s}'"))?;
        let offer_id = offer
            .trim()
            .parse::<OfferId>()
            .map_err(|e| format!("invalid offer id '{offer}': {e}"))?;
        if market.is_empty() {
            return Err(format!("missing market in '{s}'"));
        }
        Ok(Self::new(offer_id, market))
    }
}

/// A placement request: one shared stake over one or more legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerRequest {
    #[serde(alias = "amount")]
    pub stake: Amount,
    #[serde(alias = "odigrani_par")]
    pub legs: Vec<LegSelection>,
}

impl WagerRequest {
    pub fn new(stake: Amount, legs: Vec<LegSelection>) -> Self {
        Self { stake, legs }
    }

    /// Input checks that need no storage access.
    ///
    /// # Errors
    /// [`DomainError::NonPositiveStake`] or [`DomainError::EmptyLegs`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.stake <= Amount::ZERO {
            return Err(DomainError::NonPositiveStake { stake: self.stake });
        }
        if self.legs.is_empty() {
            return Err(DomainError::EmptyLegs);
        }
        Ok(())
    }
}

/// Reject the wager when the balance cannot cover the stake.
///
/// # Errors
/// [`WagerError::InsufficientFunds`] when `balance < stake`.
pub fn check_funds(balance: Amount, stake: Amount) -> Result<(), WagerError> {
    if balance < stake {
        return Err(WagerError::InsufficientFunds { balance, stake });
    }
    Ok(())
}

/// Reject a leg whose potential payout exceeds the cap. A payout equal to
/// the cap is accepted.
///
/// # Errors
/// [`WagerError::PayoutLimitExceeded`] when `stake * price > cap`, including
/// a product too large to represent.
pub fn check_payout(stake: Amount, price: Odds, cap: Amount) -> Result<(), WagerError> {
    match stake.checked_mul(price) {
        Some(payout) if payout <= cap => Ok(()),
        _ => Err(WagerError::PayoutLimitExceeded { stake, price, cap }),
    }
}

/// A leg with its price resolved at placement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLeg {
    pub offer_id: OfferId,
    pub market: String,
    pub price: Odds,
}

/// Outcome of a committed placement, echoing the accepted request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWager {
    pub player_id: PlayerId,
    pub stake: Amount,
    pub legs: Vec<ResolvedLeg>,
    pub balance_after: Amount,
}

/// A leg row to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWagerLeg {
    pub player_id: PlayerId,
    pub offer_id: OfferId,
    pub market: String,
    pub price: Odds,
    pub stake: Amount,
}

/// A recorded wager leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WagerLeg {
    pub id: i32,
    pub player_id: PlayerId,
    pub offer_id: OfferId,
    pub market: String,
    pub price: Odds,
    pub stake: Amount,
}
