//! Catalog projection: flat join rows to nested aggregates.
//!
//! The store hands back one row per league × section × market (and one per
//! offer × price) with `None` on the joined side where nothing matched.
//! These functions fold those rows into [`League`] and [`Offer`] values.
//!
//! Output order is deterministic: leagues by name, sections by id, offers by
//! scheduled time descending (ties by id). Input row order only matters
//! within a group, where it is preserved.

use std::collections::BTreeMap;

use crate::domain::{League, Market, Offer, OfferId, Section};
use crate::error::{Error, Result};
use crate::port::outbound::{LeagueRow, OfferRow};

/// Group league rows into leagues sorted by name.
///
/// Every league gets at least one section, empty when the league has none
/// stored. Markets are appended in row order without deduplication; a
/// section's offer ids are taken once, from the first row that carries them.
#[must_use]
pub fn project_leagues(mut rows: Vec<LeagueRow>) -> Vec<League> {
    rows.sort_by(|a, b| {
        (&a.league, a.section_id, &a.market).cmp(&(&b.league, b.section_id, &b.market))
    });

    // league name -> (section id -> section); a league with only null rows
    // keeps an empty section map
    let mut grouped: BTreeMap<String, BTreeMap<i32, Section>> = BTreeMap::new();

    for row in rows {
        let sections = grouped.entry(row.league).or_default();
        let Some(section_id) = row.section_id else {
            continue;
        };
        let section = sections.entry(section_id).or_default();

        if let Some(market) = row.market {
            section.markets.push(Market::new(market));
        }
        if section.offer_ids.is_empty() {
            if let Some(offer_ids) = row.offer_ids {
                section.offer_ids = offer_ids;
            }
        }
    }

    grouped
        .into_iter()
        .map(|(name, sections)| {
            let mut league = League::new(name);
            if !sections.is_empty() {
                league.sections = sections.into_values().collect();
            }
            league
        })
        .collect()
}

/// Group offer rows by offer id, newest scheduled offer first.
///
/// Prices accumulate onto their offer in row order. Rows without a price
/// (an offer with no prices yet) contribute the offer only.
#[must_use]
pub fn project_offers(rows: Vec<OfferRow>) -> Vec<Offer> {
    let mut grouped: BTreeMap<OfferId, Offer> = BTreeMap::new();

    for row in rows {
        let offer = grouped.entry(row.id).or_insert_with(|| Offer {
            id: row.id,
            code: row.code,
            name: row.name,
            scheduled_at: row.scheduled_at,
            tv_channel: row.tv_channel,
            has_stats: row.has_stats,
            prices: Vec::new(),
        });
        if let Some(price) = row.price {
            offer.prices.push(price);
        }
    }

    let mut offers: Vec<Offer> = grouped.into_values().collect();
    offers.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at).then(a.id.cmp(&b.id)));
    offers
}

/// Fold the rows of a single offer.
///
/// # Errors
/// [`Error::NotFound`] when no row belongs to `id`.
pub fn project_offer(rows: Vec<OfferRow>, id: OfferId) -> Result<Offer> {
    let rows: Vec<OfferRow> = rows.into_iter().filter(|row| row.id == id).collect();
    project_offers(rows)
        .into_iter()
        .next()
        .ok_or_else(|| Error::not_found("offer", id))
}
