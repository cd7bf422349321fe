//! Shared helpers for unit tests.
//!
//! # Modules
//!
//! - [`db`] - Migrated SQLite pools in temporary directories.
//! - [`domain`] - Builders for offers, prices and wager requests.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod db;
pub mod domain;
