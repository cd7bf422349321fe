//! Command-line interface definitions.
//!
//! Each subcommand maps onto one catalog, account or wager operation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::{LegSelection, OfferId, PlayerId};

/// Sports-wagering catalog and player ledger
#[derive(Parser, Debug)]
#[command(name = "wagerbook")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply when it is missing)
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the wagerbook CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or upgrade the database schema
    Migrate,

    /// Load a catalog feed from local JSON files
    Import(ImportArgs),

    /// List leagues with their sections
    Leagues,

    /// List offers, newest first
    Offers,

    /// Show one offer with its prices
    Offer {
        /// Offer id
        id: OfferId,
    },

    /// Create an offer from a JSON file
    CreateOffer {
        /// Path to the offer JSON
        file: PathBuf,
    },

    /// List players
    Players,

    /// Show one player
    Player {
        /// Player id
        id: PlayerId,
    },

    /// Register a player
    CreatePlayer(CredentialArgs),

    /// Check a username and password
    Login(CredentialArgs),

    /// Replace a player's password
    ResetPassword(CredentialArgs),

    /// Delete a player and their wagers
    DeletePlayer {
        /// Player id
        id: PlayerId,
    },

    /// Credit a player's balance
    Deposit {
        /// Player id
        id: PlayerId,
        /// Amount to credit
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Show a player's balance
    Balance {
        /// Player id
        id: PlayerId,
    },

    /// List the wager legs a player has placed
    Bets {
        /// Player id
        player_id: PlayerId,
    },

    /// Place a wager with one stake over one or more legs
    PlaceWager(PlaceWagerArgs),
}

/// Arguments for the `import` subcommand.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// League feed: `{"leagues": [...]}`
    #[arg(long)]
    pub leagues: Option<PathBuf>,

    /// Offer feed: a JSON array of offers
    #[arg(long)]
    pub offers: Option<PathBuf>,
}

/// Username and password pair.
#[derive(Parser, Debug)]
pub struct CredentialArgs {
    pub username: String,
    pub password: String,
}

/// Arguments for the `place-wager` subcommand.
#[derive(Parser, Debug)]
pub struct PlaceWagerArgs {
    /// Player id
    pub player_id: PlayerId,

    /// Stake shared by every leg
    #[arg(long, allow_negative_numbers = true)]
    pub stake: Decimal,

    /// Leg as `<offer_id>:<market>`, repeatable
    #[arg(long = "leg", value_name = "OFFER:MARKET")]
    pub legs: Vec<LegSelection>,
}
