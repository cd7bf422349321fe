//! Catalog read and write service.
//!
//! Reads load flat rows from the [`CatalogStore`] and hand them to the
//! projector. Writes validate input before it reaches the store; feed import
//! is best-effort and skips the items that fail.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::projector::{project_leagues, project_offer, project_offers};
use crate::domain::{League, LeagueFeed, OfferId, Offer, Price};
use crate::error::Result;
use crate::port::outbound::CatalogStore;

/// Counts reported by [`CatalogService::import`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub leagues: usize,
    pub sections: usize,
    pub markets: usize,
    pub offers: usize,
    pub skipped: usize,
}

pub struct CatalogService<S> {
    store: Arc<S>,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Every league with its sections, sorted by league name.
    pub fn leagues(&self) -> Result<Vec<League>> {
        let rows = self.store.league_rows()?;
        Ok(project_leagues(rows))
    }

    /// One offer with all of its prices.
    pub fn offer(&self, id: OfferId) -> Result<Offer> {
        let rows = self.store.offer_rows(Some(id))?;
        project_offer(rows, id)
    }

    /// All offers, newest scheduled first.
    pub fn offers(&self) -> Result<Vec<Offer>> {
        let rows = self.store.offer_rows(None)?;
        Ok(project_offers(rows))
    }

    /// Validate and store an offer with its nested prices.
    pub fn create_offer(&self, offer: &Offer) -> Result<()> {
        offer.validate()?;
        self.store.insert_offer(offer)?;
        info!(offer_id = offer.id, prices = offer.prices.len(), "Created offer");
        Ok(())
    }

    /// Add a price to an existing offer.
    pub fn add_price(&self, offer_id: OfferId, price: &Price) -> Result<()> {
        price.validate()?;
        self.store.insert_price(offer_id, price)
    }

    /// Write a decoded catalog feed through the ingestion operations.
    ///
    /// A league, section or offer that fails is logged and counted in
    /// `skipped`; the rest of the feed is still written.
    pub fn import(&self, feed: &LeagueFeed, offers: &[Offer]) -> ImportSummary {
        let mut summary = ImportSummary::default();

        for league in &feed.leagues {
            let league_id = match self.store.insert_league(&league.name) {
                Ok(id) => id,
                Err(e) => {
                    warn!(league = %league.name, error = %e, "Failed to insert league");
                    summary.skipped += 1;
                    continue;
                }
            };
            summary.leagues += 1;

            for section in league.sections.iter().filter(|s| !s.is_empty()) {
                let section_id = match self.store.insert_section(league_id, &section.offer_ids) {
                    Ok(id) => id,
                    Err(e) => {
                        warn!(league = %league.name, error = %e, "Failed to insert section");
                        summary.skipped += 1;
                        continue;
                    }
                };
                summary.sections += 1;

                for market in &section.markets {
                    match self.store.insert_market(section_id, &market.name) {
                        Ok(()) => summary.markets += 1,
                        Err(e) => {
                            warn!(section_id, market = %market.name, error = %e, "Failed to insert market");
                            summary.skipped += 1;
                        }
                    }
                }
            }
        }

        for offer in offers {
            match self.create_offer(offer) {
                Ok(()) => summary.offers += 1,
                Err(e) => {
                    warn!(offer_id = offer.id, error = %e, "Failed to insert offer");
                    summary.skipped += 1;
                }
            }
        }

        info!(
            leagues = summary.leagues,
            sections = summary.sections,
            markets = summary.markets,
            offers = summary.offers,
            skipped = summary.skipped,
            "Catalog import finished"
        );
        summary
    }
}
