//! Handlers for the catalog commands.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tabled::Tabled;

use super::command::ImportArgs;
use super::output;
use crate::application::CatalogService;
use crate::domain::{League, LeagueFeed, Offer, OfferId};
use crate::error::Result;
use crate::port::outbound::CatalogStore;

#[derive(Tabled)]
struct LeagueTableRow {
    #[tabled(rename = "League")]
    name: String,
    #[tabled(rename = "Sections")]
    sections: usize,
    #[tabled(rename = "Markets")]
    markets: String,
    #[tabled(rename = "Offers")]
    offers: String,
}

impl From<&League> for LeagueTableRow {
    fn from(league: &League) -> Self {
        let markets: Vec<&str> = league
            .sections
            .iter()
            .flat_map(|s| s.markets.iter().map(|m| m.name.as_str()))
            .collect();
        let offers: Vec<String> = league
            .sections
            .iter()
            .flat_map(|s| s.offer_ids.iter().map(ToString::to_string))
            .collect();
        Self {
            name: league.name.clone(),
            sections: league.sections.len(),
            markets: markets.join(" "),
            offers: offers.join(" "),
        }
    }
}

#[derive(Tabled)]
struct OfferTableRow {
    #[tabled(rename = "Id")]
    id: OfferId,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Scheduled")]
    scheduled_at: String,
    #[tabled(rename = "Prices")]
    prices: String,
}

impl From<&Offer> for OfferTableRow {
    fn from(offer: &Offer) -> Self {
        let prices: Vec<String> = offer
            .prices
            .iter()
            .map(|p| format!("{}={}", p.name, p.value))
            .collect();
        Self {
            id: offer.id,
            code: offer.code.clone(),
            name: offer.name.clone(),
            scheduled_at: offer.scheduled_at.format("%Y-%m-%d %H:%M").to_string(),
            prices: prices.join(" "),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn import<S: CatalogStore>(catalog: &CatalogService<S>, args: &ImportArgs) -> Result<()> {
    let feed: LeagueFeed = match &args.leagues {
        Some(path) => read_json(path)?,
        None => LeagueFeed::default(),
    };
    let offers: Vec<Offer> = match &args.offers {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    let summary = catalog.import(&feed, &offers);

    if output::is_json() {
        return output::json_output(&summary);
    }
    output::section("Import");
    output::field("Leagues", summary.leagues);
    output::field("Sections", summary.sections);
    output::field("Markets", summary.markets);
    output::field("Offers", summary.offers);
    output::field("Skipped", summary.skipped);
    Ok(())
}

pub fn leagues<S: CatalogStore>(catalog: &CatalogService<S>) -> Result<()> {
    let leagues = catalog.leagues()?;
    output::list(&leagues, |league| LeagueTableRow::from(league))
}

pub fn offers<S: CatalogStore>(catalog: &CatalogService<S>) -> Result<()> {
    let offers = catalog.offers()?;
    output::list(&offers, |offer| OfferTableRow::from(offer))
}

pub fn offer<S: CatalogStore>(catalog: &CatalogService<S>, id: OfferId) -> Result<()> {
    let offer = catalog.offer(id)?;
    if output::is_json() {
        return output::json_output(&offer);
    }

    output::section(&offer.name);
    output::field("Id", offer.id);
    output::field("Code", &offer.code);
    output::field("Scheduled", offer.scheduled_at.to_rfc3339());
    if let Some(channel) = &offer.tv_channel {
        output::field("TV", channel);
    }
    output::field("Stats", offer.has_stats);
    for price in &offer.prices {
        output::field(&price.name, price.value);
    }
    Ok(())
}

pub fn create_offer<S: CatalogStore>(catalog: &CatalogService<S>, file: &Path) -> Result<()> {
    let offer: Offer = read_json(file)?;
    catalog.create_offer(&offer)?;
    if output::is_json() {
        return output::json_output(&offer);
    }
    output::success(&format!("created offer {} ({})", offer.id, offer.name));
    Ok(())
}
