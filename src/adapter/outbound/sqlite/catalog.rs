//! SQLite catalog store implementation.
//!
//! Write path for catalog ingestion and the flat left-joined read path
//! consumed by the projector.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use super::database::connection::{checkout, DbPool};
use super::database::model::{
    format_timestamp, last_insert_id, parse_decimal, parse_timestamp, NewLeagueRow, NewMarketRow,
    NewOfferRow, NewPriceRow, NewSectionRow,
};
use super::database::schema::{leagues, markets, offers, prices, sections};
use crate::domain::{OfferId, Offer, Price};
use crate::error::{Error, Result};
use crate::port::outbound::{CatalogStore, LeagueRow, OfferRow};

type RawLeagueRow = (String, Option<i32>, Option<String>, Option<String>);

type RawOfferRow = (
    i32,
    String,
    String,
    String,
    Option<String>,
    bool,
    Option<String>,
    Option<String>,
);

/// SQLite-backed catalog store.
pub struct SqliteCatalogStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteCatalogStore {
    /// Create a new SQLite catalog store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn offer_exists(conn: &mut SqliteConnection, id: OfferId) -> QueryResult<bool> {
        diesel::select(diesel::dsl::exists(offers::table.find(id))).get_result(conn)
    }

    fn insert_price_row(conn: &mut SqliteConnection, offer_id: OfferId, price: &Price) -> QueryResult<()> {
        diesel::insert_into(prices::table)
            .values(NewPriceRow {
                offer_id,
                value: price.value.to_string(),
                name: &price.name,
            })
            .execute(conn)?;
        Ok(())
    }

    fn to_league_row((league, section_id, offer_ids, market): RawLeagueRow) -> Result<LeagueRow> {
        let offer_ids = offer_ids
            .map(|raw| {
                serde_json::from_str::<Vec<OfferId>>(&raw)
                    .map_err(|e| Error::Parse(format!("invalid offer id list '{raw}': {e}")))
            })
            .transpose()?;
        Ok(LeagueRow {
            league,
            section_id,
            offer_ids,
            market,
        })
    }

    fn to_offer_row(raw: RawOfferRow) -> Result<OfferRow> {
        let (id, code, name, scheduled_at, tv_channel, has_stats, value, price_name) = raw;
        let price = match (value, price_name) {
            (Some(value), Some(name)) => Some(Price::new(parse_decimal(&value)?, name)),
            _ => None,
        };
        Ok(OfferRow {
            id,
            code,
            name,
            scheduled_at: parse_timestamp(&scheduled_at)?,
            tv_channel,
            has_stats,
            price,
        })
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn insert_league(&self, name: &str) -> Result<i32> {
        let mut conn = checkout(&self.pool)?;

        conn.immediate_transaction::<_, Error, _>(|conn| {
            let existing: Option<i32> = leagues::table
                .filter(leagues::name.eq(name))
                .select(leagues::id)
                .first(conn)
                .optional()?;
            if let Some(id) = existing {
                debug!(league = name, id, "League already present, skipping insert");
                return Ok(id);
            }

            diesel::insert_into(leagues::table)
                .values(NewLeagueRow { name })
                .execute(conn)?;
            Ok(last_insert_id(conn)?)
        })
    }

    fn insert_section(&self, league_id: i32, offer_ids: &[OfferId]) -> Result<i32> {
        let offer_ids = serde_json::to_string(offer_ids)?;
        let mut conn = checkout(&self.pool)?;

        conn.immediate_transaction::<_, Error, _>(|conn| {
            let league_exists: bool =
                diesel::select(diesel::dsl::exists(leagues::table.find(league_id)))
                    .get_result(conn)?;
            if !league_exists {
                return Err(Error::not_found("league", league_id));
            }
            diesel::insert_into(sections::table)
                .values(NewSectionRow {
                    league_id,
                    offer_ids,
                })
                .execute(conn)?;
            Ok(last_insert_id(conn)?)
        })
    }

    fn insert_market(&self, section_id: i32, name: &str) -> Result<()> {
        let mut conn = checkout(&self.pool)?;

        conn.immediate_transaction::<_, Error, _>(|conn| {
            let section_exists: bool =
                diesel::select(diesel::dsl::exists(sections::table.find(section_id)))
                    .get_result(conn)?;
            if !section_exists {
                return Err(Error::not_found("section", section_id));
            }
            diesel::insert_into(markets::table)
                .values(NewMarketRow { section_id, name })
                .execute(conn)?;
            Ok(())
        })
    }

    fn insert_offer(&self, offer: &Offer) -> Result<()> {
        let mut conn = checkout(&self.pool)?;

        conn.immediate_transaction::<_, Error, _>(|conn| {
            if Self::offer_exists(conn, offer.id)? {
                return Err(Error::OfferExists(offer.id));
            }
            diesel::insert_into(offers::table)
                .values(NewOfferRow {
                    id: offer.id,
                    code: &offer.code,
                    name: &offer.name,
                    scheduled_at: format_timestamp(&offer.scheduled_at),
                    tv_channel: offer.tv_channel.as_deref(),
                    has_stats: offer.has_stats,
                })
                .execute(conn)?;
            for price in &offer.prices {
                Self::insert_price_row(conn, offer.id, price)?;
            }
            Ok(())
        })?;

        debug!(offer_id = offer.id, prices = offer.prices.len(), "Inserted offer");
        Ok(())
    }

    fn insert_price(&self, offer_id: OfferId, price: &Price) -> Result<()> {
        let mut conn = checkout(&self.pool)?;

        conn.immediate_transaction::<_, Error, _>(|conn| {
            if !Self::offer_exists(conn, offer_id)? {
                return Err(Error::not_found("offer", offer_id));
            }
            Self::insert_price_row(conn, offer_id, price)?;
            Ok(())
        })
    }

    fn league_rows(&self) -> Result<Vec<LeagueRow>> {
        let mut conn = checkout(&self.pool)?;

        let rows: Vec<RawLeagueRow> = leagues::table
            .left_join(sections::table.left_join(markets::table))
            .select((
                leagues::name,
                sections::id.nullable(),
                sections::offer_ids.nullable(),
                markets::name.nullable(),
            ))
            .order((
                leagues::name.asc(),
                sections::id.nullable().asc(),
                markets::name.nullable().asc(),
            ))
            .load(&mut conn)?;

        rows.into_iter().map(Self::to_league_row).collect()
    }

    fn offer_rows(&self, offer_id: Option<OfferId>) -> Result<Vec<OfferRow>> {
        let mut conn = checkout(&self.pool)?;

        let mut query = offers::table
            .left_join(prices::table)
            .select((
                offers::id,
                offers::code,
                offers::name,
                offers::scheduled_at,
                offers::tv_channel,
                offers::has_stats,
                prices::value.nullable(),
                prices::name.nullable(),
            ))
            .order((
                offers::scheduled_at.desc(),
                offers::id.asc(),
                prices::id.nullable().asc(),
            ))
            .into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(id) = offer_id {
            query = query.filter(offers::id.eq(id));
        }

        let rows: Vec<RawOfferRow> = query.load(&mut conn)?;
        rows.into_iter().map(Self::to_offer_row).collect()
    }
}
