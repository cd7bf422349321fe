//! Wager placement.
//!
//! ```text
//! validate ──► lock ──► load player ──► check funds ──► per leg:
//!                                                       resolve price
//!                                                       check payout
//!                                  ◄── commit ◄── insert legs, debit stake
//! ```
//!
//! Everything after `lock` runs inside one [`LedgerStore::locked`] section.
//! A rejection at any step rolls the section back, so a refused wager leaves
//! neither legs nor a balance change behind.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::wager::{check_funds, check_payout};
use crate::domain::{Amount, NewWagerLeg, PlacedWager, PlayerId, ResolvedLeg, WagerRequest};
use crate::error::{Error, Result, WagerError};
use crate::port::outbound::{LedgerStore, LedgerTransaction};

pub struct WagerService<L> {
    ledger: Arc<L>,
    payout_cap: Amount,
}

impl<L: LedgerStore> WagerService<L> {
    pub fn new(ledger: Arc<L>, payout_cap: Amount) -> Self {
        Self { ledger, payout_cap }
    }

    /// Place a wager for `player_id`.
    ///
    /// The stake is debited once and shared by every leg; each leg records
    /// the price current at placement.
    ///
    /// # Errors
    /// - [`Error::Domain`] for a non-positive stake or an empty leg list
    /// - [`Error::NotFound`] when the player does not exist
    /// - [`Error::Wager`] for insufficient funds, an unknown price or a
    ///   payout over the cap
    pub fn place(&self, player_id: PlayerId, request: &WagerRequest) -> Result<PlacedWager> {
        if let Err(e) = request.validate() {
            warn!(player_id, reason = %e, "Wager rejected");
            return Err(e.into());
        }

        let result = self
            .ledger
            .locked(|tx| self.commit(tx, player_id, request));

        match &result {
            Ok(placed) => info!(
                player_id,
                stake = %placed.stake,
                legs = placed.legs.len(),
                balance = %placed.balance_after,
                "Wager placed"
            ),
            Err(e) if e.is_user_error() => warn!(player_id, reason = %e, "Wager rejected"),
            Err(e) => warn!(player_id, error = %e, "Wager failed"),
        }
        result
    }

    fn commit(
        &self,
        tx: &mut dyn LedgerTransaction,
        player_id: PlayerId,
        request: &WagerRequest,
    ) -> Result<PlacedWager> {
        let stake = request.stake;
        let player = tx
            .player(player_id)?
            .ok_or_else(|| Error::not_found("player", player_id))?;
        debug!(player_id, balance = %player.balance, %stake, "Player locked");

        check_funds(player.balance, stake)?;

        let mut legs = Vec::with_capacity(request.legs.len());
        for selection in &request.legs {
            let price = tx
                .price(selection.offer_id, &selection.market)?
                .ok_or_else(|| WagerError::PriceNotFound {
                    offer_id: selection.offer_id,
                    market: selection.market.clone(),
                })?;
            check_payout(stake, price, self.payout_cap)?;
            debug!(leg = %selection, %price, "Leg accepted");
            legs.push(ResolvedLeg {
                offer_id: selection.offer_id,
                market: selection.market.clone(),
                price,
            });
        }

        for leg in &legs {
            tx.insert_leg(&NewWagerLeg {
                player_id,
                offer_id: leg.offer_id,
                market: leg.market.clone(),
                price: leg.price,
                stake,
            })?;
        }

        let balance_after = player.balance - stake;
        tx.set_balance(player_id, balance_after)?;

        Ok(PlacedWager {
            player_id,
            stake,
            legs,
            balance_after,
        })
    }
}
