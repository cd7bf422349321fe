//! Handlers for the player commands.

use serde_json::json;
use tabled::Tabled;

use super::command::CredentialArgs;
use super::output;
use crate::application::AccountService;
use crate::domain::{Amount, NewPlayer, OfferId, Player, PlayerId, WagerLeg};
use crate::error::Result;
use crate::port::outbound::LedgerStore;

#[derive(Tabled)]
struct PlayerTableRow {
    #[tabled(rename = "Id")]
    id: PlayerId,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Balance")]
    balance: Amount,
}

impl From<&Player> for PlayerTableRow {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            username: player.username.clone(),
            balance: player.balance,
        }
    }
}

#[derive(Tabled)]
struct LegTableRow {
    #[tabled(rename = "Leg")]
    id: i32,
    #[tabled(rename = "Offer")]
    offer_id: OfferId,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Price")]
    price: Amount,
    #[tabled(rename = "Stake")]
    stake: Amount,
}

impl From<&WagerLeg> for LegTableRow {
    fn from(leg: &WagerLeg) -> Self {
        Self {
            id: leg.id,
            offer_id: leg.offer_id,
            market: leg.market.clone(),
            price: leg.price,
            stake: leg.stake,
        }
    }
}

fn show_player(player: &Player) -> Result<()> {
    if output::is_json() {
        return output::json_output(player);
    }
    output::section(&player.username);
    output::field("Id", player.id);
    output::field("Balance", player.balance);
    Ok(())
}

pub fn players<L: LedgerStore>(accounts: &AccountService<L>) -> Result<()> {
    let players = accounts.players()?;
    output::list(&players, |player| PlayerTableRow::from(player))
}

pub fn player<L: LedgerStore>(accounts: &AccountService<L>, id: PlayerId) -> Result<()> {
    show_player(&accounts.player(id)?)
}

pub fn create_player<L: LedgerStore>(accounts: &AccountService<L>, args: &CredentialArgs) -> Result<()> {
    let player = accounts.create_player(&NewPlayer::new(&args.username, &args.password))?;
    if output::is_json() {
        return output::json_output(&player);
    }
    output::success(&format!("registered {} as player {}", player.username, player.id));
    Ok(())
}

pub fn login<L: LedgerStore>(accounts: &AccountService<L>, args: &CredentialArgs) -> Result<()> {
    let player = accounts.login(&args.username, &args.password)?;
    if output::is_json() {
        return output::json_output(&player);
    }
    output::success(&format!("logged in as {} (player {})", player.username, player.id));
    Ok(())
}

pub fn reset_password<L: LedgerStore>(accounts: &AccountService<L>, args: &CredentialArgs) -> Result<()> {
    accounts.reset_password(&args.username, &args.password)?;
    output::success(&format!("password reset for {}", args.username));
    Ok(())
}

pub fn delete_player<L: LedgerStore>(accounts: &AccountService<L>, id: PlayerId) -> Result<()> {
    accounts.delete_player(id)?;
    output::success(&format!("deleted player {id}"));
    Ok(())
}

pub fn deposit<L: LedgerStore>(accounts: &AccountService<L>, id: PlayerId, amount: Amount) -> Result<()> {
    let balance = accounts.deposit(id, amount)?;
    print_balance(id, balance)
}

pub fn balance<L: LedgerStore>(accounts: &AccountService<L>, id: PlayerId) -> Result<()> {
    let balance = accounts.balance(id)?;
    print_balance(id, balance)
}

fn print_balance(id: PlayerId, balance: Amount) -> Result<()> {
    if output::is_json() {
        return output::json_output(&json!({ "player_id": id, "balance": balance }));
    }
    output::field("Player", id);
    output::field("Balance", balance);
    Ok(())
}

pub fn bets<L: LedgerStore>(accounts: &AccountService<L>, player_id: PlayerId) -> Result<()> {
    let legs = accounts.wager_legs(player_id)?;
    output::list(&legs, |leg| LegTableRow::from(leg))
}
