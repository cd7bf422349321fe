//! Subcommand dispatch and exit status mapping.
//!
//! User errors exit with [`EXIT_USER_ERROR`] and print the message; internal
//! errors exit with [`EXIT_INTERNAL_ERROR`] and are logged with their cause.

use std::process::ExitCode;

use tracing::error;

use super::command::{Cli, Commands};
use super::output::{self, OutputConfig};
use super::{account, catalog, wager};
use crate::error::{Error, ErrorKind, Result};
use crate::infrastructure::bootstrap::{self, Services};
use crate::infrastructure::config::Config;

/// Exit status for internal failures.
pub const EXIT_INTERNAL_ERROR: u8 = 1;
/// Exit status for rejected input.
pub const EXIT_USER_ERROR: u8 = 2;

/// Run the parsed command line to completion.
pub fn run(cli: Cli) -> ExitCode {
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("failed to load config: {e}"));
            return ExitCode::from(EXIT_INTERNAL_ERROR);
        }
    };
    config.init_logging();

    match execute(&cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(report(&e)),
    }
}

fn report(err: &Error) -> u8 {
    match err.kind() {
        ErrorKind::User => {
            output::error(&err.to_string());
            EXIT_USER_ERROR
        }
        ErrorKind::Internal => {
            error!(error = %err, "Command failed");
            output::error("internal error, see log for details");
            EXIT_INTERNAL_ERROR
        }
    }
}

/// Dispatch one subcommand against the configured database.
///
/// # Errors
/// Returns the first error raised by the command.
pub fn execute(command: &Commands, config: &Config) -> Result<()> {
    if let Commands::Migrate = command {
        bootstrap::open_database(config)?;
        output::success(&format!("database {} is up to date", config.database));
        return Ok(());
    }

    let Services {
        catalog: catalog_service,
        accounts,
        wagers,
    } = bootstrap::build(config)?;

    match command {
        Commands::Migrate => Ok(()),
        Commands::Import(args) => catalog::import(&catalog_service, args),
        Commands::Leagues => catalog::leagues(&catalog_service),
        Commands::Offers => catalog::offers(&catalog_service),
        Commands::Offer { id } => catalog::offer(&catalog_service, *id),
        Commands::CreateOffer { file } => catalog::create_offer(&catalog_service, file),
        Commands::Players => account::players(&accounts),
        Commands::Player { id } => account::player(&accounts, *id),
        Commands::CreatePlayer(args) => account::create_player(&accounts, args),
        Commands::Login(args) => account::login(&accounts, args),
        Commands::ResetPassword(args) => account::reset_password(&accounts, args),
        Commands::DeletePlayer { id } => account::delete_player(&accounts, *id),
        Commands::Deposit { id, amount } => account::deposit(&accounts, *id, *amount),
        Commands::Balance { id } => account::balance(&accounts, *id),
        Commands::Bets { player_id } => account::bets(&accounts, *player_id),
        Commands::PlaceWager(args) => wager::place(&wagers, args),
    }
}
