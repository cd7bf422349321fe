//! Player account service: registration, login and balance changes.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::error::DomainError;
use crate::domain::{Amount, NewPlayer, Player, PlayerId, WagerLeg};
use crate::error::{Error, Result};
use crate::port::outbound::LedgerStore;

pub struct AccountService<L> {
    ledger: Arc<L>,
}

impl<L: LedgerStore> AccountService<L> {
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Register a player with a zero balance.
    pub fn create_player(&self, player: &NewPlayer) -> Result<Player> {
        player.validate()?;
        let created = self.ledger.create_player(player)?;
        info!(player_id = created.id, username = %created.username, "Player registered");
        Ok(created)
    }

    pub fn players(&self) -> Result<Vec<Player>> {
        self.ledger.players()
    }

    pub fn player(&self, id: PlayerId) -> Result<Player> {
        self.ledger
            .player(id)?
            .ok_or_else(|| Error::not_found("player", id))
    }

    /// Check credentials. An unknown username and a wrong password are
    /// reported the same way.
    pub fn login(&self, username: &str, password: &str) -> Result<Player> {
        match self.ledger.player_by_username(username)? {
            Some(player) if player.password == password => {
                debug!(player_id = player.id, "Login accepted");
                Ok(player)
            }
            _ => {
                warn!(username, "Login rejected");
                Err(Error::InvalidCredentials)
            }
        }
    }

    pub fn reset_password(&self, username: &str, password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(DomainError::EmptyField { field: "password" }.into());
        }
        if !self.ledger.set_password(username, password)? {
            return Err(Error::not_found("player", username));
        }
        info!(username, "Password reset");
        Ok(())
    }

    /// Remove a player and every leg they placed.
    pub fn delete_player(&self, id: PlayerId) -> Result<()> {
        let legs = self.ledger.locked(|tx| {
            let legs = tx.delete_legs(id)?;
            if !tx.delete_player(id)? {
                return Err(Error::not_found("player", id));
            }
            Ok(legs)
        })?;
        info!(player_id = id, legs, "Player deleted");
        Ok(())
    }

    /// Credit `amount` to a player's balance. Returns the new balance.
    pub fn deposit(&self, id: PlayerId, amount: Amount) -> Result<Amount> {
        if amount <= Amount::ZERO {
            return Err(DomainError::NonPositiveAmount { amount }.into());
        }
        let balance = self.ledger.locked(|tx| {
            let player = tx.player(id)?.ok_or_else(|| Error::not_found("player", id))?;
            let balance = player.balance.checked_add(amount).ok_or(
                DomainError::AmountOutOfRange {
                    balance: player.balance,
                    amount,
                },
            )?;
            tx.set_balance(id, balance)?;
            Ok(balance)
        })?;
        info!(player_id = id, %amount, %balance, "Deposit credited");
        Ok(balance)
    }

    pub fn balance(&self, id: PlayerId) -> Result<Amount> {
        Ok(self.player(id)?.balance)
    }

    /// Legs recorded for a player, oldest first.
    pub fn wager_legs(&self, id: PlayerId) -> Result<Vec<WagerLeg>> {
        self.player(id)?;
        self.ledger.wager_legs(id)
    }
}
