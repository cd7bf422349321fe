//! Database model types for Diesel ORM.
//!
//! Decimal values (odds, balances, stakes) are stored as canonical decimal
//! strings and timestamps as RFC 3339 text; the helpers at the bottom
//! convert them back into domain types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use super::schema::{leagues, markets, offers, players, prices, sections, wager_legs};
use crate::domain::{NewWagerLeg, Player, WagerLeg};
use crate::error::{Error, Result};

/// Database row for a league (insertable).
#[derive(Insertable, Debug)]
#[diesel(table_name = leagues)]
pub struct NewLeagueRow<'a> {
    pub name: &'a str,
}

/// Database row for a section (insertable). `offer_ids` is a JSON array.
#[derive(Insertable, Debug)]
#[diesel(table_name = sections)]
pub struct NewSectionRow {
    pub league_id: i32,
    pub offer_ids: String,
}

/// Database row for a market (insertable).
#[derive(Insertable, Debug)]
#[diesel(table_name = markets)]
pub struct NewMarketRow<'a> {
    pub section_id: i32,
    pub name: &'a str,
}

/// Database row for an offer (insertable).
#[derive(Insertable, Debug)]
#[diesel(table_name = offers)]
pub struct NewOfferRow<'a> {
    pub id: i32,
    pub code: &'a str,
    pub name: &'a str,
    pub scheduled_at: String,
    pub tv_channel: Option<&'a str>,
    pub has_stats: bool,
}

/// Database row for a price (insertable).
#[derive(Insertable, Debug)]
#[diesel(table_name = prices)]
pub struct NewPriceRow<'a> {
    pub offer_id: i32,
    pub value: String,
    pub name: &'a str,
}

/// Database row for a player (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = players)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlayerRow {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub balance: String,
}

impl PlayerRow {
    pub fn into_player(self) -> Result<Player> {
        Ok(Player {
            id: self.id,
            username: self.username,
            password: self.password,
            balance: parse_decimal(&self.balance)?,
        })
    }
}

/// Database row for a player (insertable).
#[derive(Insertable, Debug)]
#[diesel(table_name = players)]
pub struct NewPlayerRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub balance: String,
}

/// Database row for a wager leg (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = wager_legs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WagerLegRow {
    pub id: i32,
    pub player_id: i32,
    pub offer_id: i32,
    pub market_name: String,
    pub price: String,
    pub stake: String,
}

impl WagerLegRow {
    pub fn into_leg(self) -> Result<WagerLeg> {
        Ok(WagerLeg {
            id: self.id,
            player_id: self.player_id,
            offer_id: self.offer_id,
            market: self.market_name,
            price: parse_decimal(&self.price)?,
            stake: parse_decimal(&self.stake)?,
        })
    }
}

/// Database row for a wager leg (insertable).
#[derive(Insertable, Debug)]
#[diesel(table_name = wager_legs)]
pub struct NewWagerLegRow<'a> {
    pub player_id: i32,
    pub offer_id: i32,
    pub market_name: &'a str,
    pub price: String,
    pub stake: String,
}

impl<'a> From<&'a NewWagerLeg> for NewWagerLegRow<'a> {
    fn from(leg: &'a NewWagerLeg) -> Self {
        Self {
            player_id: leg.player_id,
            offer_id: leg.offer_id,
            market_name: &leg.market,
            price: leg.price.to_string(),
            stake: leg.stake.to_string(),
        }
    }
}

/// Result of `SELECT last_insert_rowid()`.
#[derive(QueryableByName)]
pub struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    pub id: i32,
}

/// Row id assigned by the most recent insert on this connection.
pub fn last_insert_id(conn: &mut SqliteConnection) -> QueryResult<i32> {
    diesel::sql_query("SELECT last_insert_rowid() AS id")
        .get_result::<LastInsertRowId>(conn)
        .map(|row| row.id)
}

/// Parse a stored decimal string.
pub fn parse_decimal(raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw).map_err(|e| Error::Parse(format!("invalid decimal '{raw}': {e}")))
}

/// Parse a stored RFC 3339 timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::Parse(format!("invalid timestamp '{raw}': {e}")))
}

/// Serialize a timestamp so lexical order matches chronological order.
#[must_use]
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn player_row_converts_balance() {
        let row = PlayerRow {
            id: 5,
            username: "ana".into(),
            password: "pw".into(),
            balance: "100.25".into(),
        };
        let player = row.into_player().unwrap();
        assert_eq!(player.balance, dec!(100.25));
    }

    #[test]
    fn corrupt_decimal_is_a_parse_error() {
        let row = PlayerRow {
            id: 5,
            username: "ana".into(),
            password: "pw".into(),
            balance: "lots".into(),
        };
        assert!(matches!(row.into_player(), Err(Error::Parse(_))));
    }

    #[test]
    fn leg_row_round_trips_through_domain() {
        let leg = NewWagerLeg {
            player_id: 1,
            offer_id: 2,
            market: "X".into(),
            price: dec!(3.40),
            stake: dec!(10),
        };
        let row = NewWagerLegRow::from(&leg);
        assert_eq!(row.price, "3.40");
        assert_eq!(row.market_name, "X");
    }

    #[test]
    fn timestamps_format_in_utc_seconds() {
        let at: DateTime<Utc> = "2026-05-20T20:45:00+02:00".parse().unwrap();
        let text = format_timestamp(&at);
        assert_eq!(text, "2026-05-20T18:45:00Z");
        assert_eq!(parse_timestamp(&text).unwrap(), at);
    }
}
