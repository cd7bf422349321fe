//! Catalog aggregates served to clients.
//!
//! - [`League`] - top-level grouping, keyed by name
//! - [`Section`] - market names plus offer-id cross references
//! - [`Offer`] - a bettable fixture owning its [`Price`] list
//!
//! Read-side aggregates are rebuilt per query by the projector and never
//! cached. The serde aliases accept the upstream catalog feed's field names
//! so feed files deserialize directly into these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::{OfferId, Odds};

/// A competition grouping sections of markets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    #[serde(alias = "naziv")]
    pub name: String,
    #[serde(default, alias = "razrade")]
    pub sections: Vec<Section>,
}

impl League {
    /// A league with the single empty section every projected league starts with.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: vec![Section::default()],
        }
    }
}

/// A sub-grouping of a league.
///
/// Offers are referenced by id only; the offers themselves are read through
/// the offer projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, alias = "tipovi")]
    pub markets: Vec<Market>,
    #[serde(default, alias = "ponude")]
    pub offer_ids: Vec<OfferId>,
}

impl Section {
    /// True when the section carries neither markets nor offers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty() && self.offer_ids.is_empty()
    }
}

/// A selection type within a section, e.g. "1", "X" or "2".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    #[serde(alias = "naziv")]
    pub name: String,
}

impl Market {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Odds for one market of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    #[serde(alias = "tecaj")]
    pub value: Odds,
    #[serde(alias = "naziv")]
    pub name: String,
}

impl Price {
    pub fn new(value: Odds, name: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }

    /// Check that the odds are positive and the market is named.
    ///
    /// # Errors
    /// Returns [`DomainError`] when either rule is violated.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "price name" });
        }
        if self.value <= Odds::ZERO {
            return Err(DomainError::NonPositivePrice {
                name: self.name.clone(),
                value: self.value,
            });
        }
        Ok(())
    }
}

/// A single bettable event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    #[serde(alias = "broj")]
    pub code: String,
    #[serde(alias = "naziv")]
    pub name: String,
    #[serde(alias = "vrijeme")]
    pub scheduled_at: DateTime<Utc>,
    #[serde(default, alias = "tv_kanal", skip_serializing_if = "Option::is_none")]
    pub tv_channel: Option<String>,
    #[serde(default, alias = "ima_statistiku")]
    pub has_stats: bool,
    #[serde(default, alias = "tecajevi")]
    pub prices: Vec<Price>,
}

impl Offer {
    /// Check the offer attributes and every nested price.
    ///
    /// # Errors
    /// Returns the first [`DomainError`] found.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id <= 0 {
            return Err(DomainError::NonPositiveOfferId { id: self.id });
        }
        if self.code.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "offer code" });
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "offer name" });
        }
        self.prices.iter().try_for_each(Price::validate)
    }
}

/// A decoded catalog feed: the league tree and the offers it references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueFeed {
    #[serde(default, alias = "lige")]
    pub leagues: Vec<League>,
}
