//! SQLite player ledger.
//!
//! Locked sections run under `BEGIN IMMEDIATE`, which takes the database
//! write lock before the first read. Two placements for the same player
//! therefore serialize: the second one sees the balance the first left.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;
use tracing::debug;

use super::database::connection::{checkout, DbPool};
use super::database::model::{
    last_insert_id, parse_decimal, NewPlayerRow, NewWagerLegRow, PlayerRow, WagerLegRow,
};
use super::database::schema::{players, prices, wager_legs};
use crate::domain::{Amount, NewPlayer, NewWagerLeg, OfferId, Odds, Player, PlayerId, WagerLeg};
use crate::error::{Error, Result};
use crate::port::outbound::{LedgerStore, LedgerTransaction};

/// SQLite-backed player ledger.
pub struct SqliteLedger {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteLedger {
    /// Create a new ledger with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// [`LedgerTransaction`] over a connection inside an immediate transaction.
struct SqliteLedgerTransaction<'a> {
    conn: &'a mut SqliteConnection,
}

impl LedgerTransaction for SqliteLedgerTransaction<'_> {
    fn player(&mut self, id: PlayerId) -> Result<Option<Player>> {
        let row: Option<PlayerRow> = players::table
            .find(id)
            .select(PlayerRow::as_select())
            .first(self.conn)
            .optional()?;
        row.map(PlayerRow::into_player).transpose()
    }

    fn set_balance(&mut self, id: PlayerId, balance: Amount) -> Result<()> {
        let updated = diesel::update(players::table.find(id))
            .set(players::balance.eq(balance.to_string()))
            .execute(self.conn)?;
        if updated == 0 {
            return Err(Error::not_found("player", id));
        }
        Ok(())
    }

    fn price(&mut self, offer_id: OfferId, market: &str) -> Result<Option<Odds>> {
        let raw: Option<String> = prices::table
            .filter(prices::offer_id.eq(offer_id))
            .filter(prices::name.eq(market))
            .select(prices::value)
            .order(prices::id.desc())
            .first(self.conn)
            .optional()?;
        raw.as_deref().map(parse_decimal).transpose()
    }

    fn insert_leg(&mut self, leg: &NewWagerLeg) -> Result<()> {
        diesel::insert_into(wager_legs::table)
            .values(NewWagerLegRow::from(leg))
            .execute(self.conn)?;
        Ok(())
    }

    fn delete_legs(&mut self, player_id: PlayerId) -> Result<usize> {
        let deleted = diesel::delete(wager_legs::table.filter(wager_legs::player_id.eq(player_id)))
            .execute(self.conn)?;
        Ok(deleted)
    }

    fn delete_player(&mut self, id: PlayerId) -> Result<bool> {
        let deleted = diesel::delete(players::table.find(id)).execute(self.conn)?;
        Ok(deleted > 0)
    }
}

impl LedgerStore for SqliteLedger {
    fn create_player(&self, player: &NewPlayer) -> Result<Player> {
        let mut conn = checkout(&self.pool)?;

        let id = conn
            .immediate_transaction::<_, Error, _>(|conn| {
                let taken: bool = diesel::select(diesel::dsl::exists(
                    players::table.filter(players::username.eq(&player.username)),
                ))
                .get_result(conn)?;
                if taken {
                    return Err(Error::UsernameTaken(player.username.clone()));
                }
                diesel::insert_into(players::table)
                    .values(NewPlayerRow {
                        username: &player.username,
                        password: &player.password,
                        balance: Amount::ZERO.to_string(),
                    })
                    .execute(conn)
                    .map_err(|e| match e {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            Error::UsernameTaken(player.username.clone())
                        }
                        other => other.into(),
                    })?;
                Ok(last_insert_id(conn)?)
            })?;

        debug!(player_id = id, username = %player.username, "Created player");
        Ok(Player {
            id,
            username: player.username.clone(),
            password: player.password.clone(),
            balance: Amount::ZERO,
        })
    }

    fn players(&self) -> Result<Vec<Player>> {
        let mut conn = checkout(&self.pool)?;

        let rows: Vec<PlayerRow> = players::table
            .select(PlayerRow::as_select())
            .order(players::id.asc())
            .load(&mut conn)?;
        rows.into_iter().map(PlayerRow::into_player).collect()
    }

    fn player(&self, id: PlayerId) -> Result<Option<Player>> {
        let mut conn = checkout(&self.pool)?;

        let row: Option<PlayerRow> = players::table
            .find(id)
            .select(PlayerRow::as_select())
            .first(&mut conn)
            .optional()?;
        row.map(PlayerRow::into_player).transpose()
    }

    fn player_by_username(&self, username: &str) -> Result<Option<Player>> {
        let mut conn = checkout(&self.pool)?;

        let row: Option<PlayerRow> = players::table
            .filter(players::username.eq(username))
            .select(PlayerRow::as_select())
            .first(&mut conn)
            .optional()?;
        row.map(PlayerRow::into_player).transpose()
    }

    fn set_password(&self, username: &str, password: &str) -> Result<bool> {
        let mut conn = checkout(&self.pool)?;

        let updated = diesel::update(players::table.filter(players::username.eq(username)))
            .set(players::password.eq(password))
            .execute(&mut conn)?;
        Ok(updated > 0)
    }

    fn wager_legs(&self, player_id: PlayerId) -> Result<Vec<WagerLeg>> {
        let mut conn = checkout(&self.pool)?;

        let rows: Vec<WagerLegRow> = wager_legs::table
            .filter(wager_legs::player_id.eq(player_id))
            .select(WagerLegRow::as_select())
            .order(wager_legs::id.asc())
            .load(&mut conn)?;
        rows.into_iter().map(WagerLegRow::into_leg).collect()
    }

    fn locked<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn LedgerTransaction) -> Result<T>,
    {
        let mut conn = checkout(&self.pool)?;

        conn.immediate_transaction(|conn| {
            let mut tx = SqliteLedgerTransaction { conn };
            f(&mut tx)
        })
    }
}
