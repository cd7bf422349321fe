use std::process::ExitCode;

use clap::Parser;
use wagerbook::adapter::inbound::cli::command::Cli;
use wagerbook::adapter::inbound::cli::dispatch;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    dispatch::run(Cli::parse())
}
