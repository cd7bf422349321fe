use rust_decimal::Decimal;
use wagerbook::domain::{
    League, LeagueFeed, LegSelection, Market, Offer, OfferId, Price, Section, WagerRequest,
};

pub fn offer_at(id: OfferId, scheduled_at: &str, prices: &[(&str, Decimal)]) -> Offer {
    Offer {
        id,
        code: format!("{id:04}"),
        name: format!("Home {id} - Away {id}"),
        scheduled_at: scheduled_at.parse().expect("valid timestamp"),
        tv_channel: None,
        has_stats: false,
        prices: prices
            .iter()
            .map(|(name, value)| Price::new(*value, *name))
            .collect(),
    }
}

pub fn offer(id: OfferId, prices: &[(&str, Decimal)]) -> Offer {
    offer_at(id, "2026-05-20T18:00:00Z", prices)
}

pub fn section(markets: &[&str], offer_ids: &[OfferId]) -> Section {
    Section {
        markets: markets.iter().map(|m| Market::new(*m)).collect(),
        offer_ids: offer_ids.to_vec(),
    }
}

pub fn league(name: &str, sections: Vec<Section>) -> League {
    League {
        name: name.to_string(),
        sections,
    }
}

pub fn feed(leagues: Vec<League>) -> LeagueFeed {
    LeagueFeed { leagues }
}

pub fn request(stake: Decimal, legs: &[(OfferId, &str)]) -> WagerRequest {
    WagerRequest::new(
        stake,
        legs.iter()
            .map(|(offer_id, market)| LegSelection::new(*offer_id, *market))
            .collect(),
    )
}

pub fn price_of(offer: &Offer, market: &str) -> Option<Decimal> {
    offer
        .prices
        .iter()
        .find(|p| p.name == market)
        .map(|p| p.value)
}
