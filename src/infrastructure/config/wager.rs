//! Wager placement limits.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::DEFAULT_PAYOUT_CAP;

/// Limits applied by the wager placement service.
#[derive(Debug, Clone, Deserialize)]
pub struct WagerConfig {
    /// Maximum stake x price allowed on any single leg.
    #[serde(default = "default_payout_cap")]
    pub payout_cap: Decimal,
}

fn default_payout_cap() -> Decimal {
    DEFAULT_PAYOUT_CAP
}

impl Default for WagerConfig {
    fn default() -> Self {
        Self {
            payout_cap: default_payout_cap(),
        }
    }
}
