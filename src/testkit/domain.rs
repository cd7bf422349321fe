//! Builders for domain values used across tests.

use rust_decimal::Decimal;

use crate::domain::{LegSelection, Offer, OfferId, Price, WagerRequest};

/// An offer scheduled at a fixed instant with the given `(market, price)` pairs.
pub fn offer(id: OfferId, prices: &[(&str, Decimal)]) -> Offer {
    Offer {
        id,
        code: format!("{id:04}"),
        name: format!("Home {id} - Away {id}"),
        scheduled_at: "2026-05-20T18:00:00Z".parse().expect("valid timestamp"),
        tv_channel: None,
        has_stats: false,
        prices: prices
            .iter()
            .map(|(name, value)| Price::new(*value, *name))
            .collect(),
    }
}

/// A wager request over `(offer_id, market)` legs.
pub fn request(stake: Decimal, legs: &[(OfferId, &str)]) -> WagerRequest {
    WagerRequest::new(
        stake,
        legs.iter()
            .map(|(offer_id, market)| LegSelection::new(*offer_id, *market))
            .collect(),
    )
}
