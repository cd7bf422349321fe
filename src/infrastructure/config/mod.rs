//! Infrastructure configuration modules.

pub mod logging;
pub mod pool;
pub mod settings;
pub mod wager;

pub use settings::Config;
