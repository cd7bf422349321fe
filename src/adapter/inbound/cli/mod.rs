//! Command-line adapter.
//!
//! [`dispatch::run`] loads configuration, initializes logging, opens the
//! database and dispatches one subcommand.

pub mod account;
pub mod catalog;
pub mod command;
pub mod dispatch;
pub mod output;
pub mod wager;
