use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Business-rule rejections raised while placing a wager.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WagerError {
    #[error("insufficient funds: balance {balance} < stake {stake}")]
    InsufficientFunds { balance: Decimal, stake: Decimal },

    #[error("no price for offer {offer_id} and market '{market}'")]
    PriceNotFound { offer_id: i32, market: String },

    #[error("payout limit exceeded: {stake} x {price} > {cap}")]
    PayoutLimitExceeded {
        stake: Decimal,
        price: Decimal,
        cap: Decimal,
    },
}

/// Whether an error is something the caller can correct.
///
/// The boundary layer maps [`ErrorKind::User`] to a client-correctable
/// response and [`ErrorKind::Internal`] to an opaque failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    User,
    Internal,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Wager(#[from] WagerError),

    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("offer {0} already exists")]
    OfferExists(i32),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Classify this error for the boundary layer.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_)
            | Self::Wager(_)
            | Self::NotFound { .. }
            | Self::UsernameTaken(_)
            | Self::OfferExists(_)
            | Self::InvalidCredentials => ErrorKind::User,
            Self::Config(_)
            | Self::Json(_)
            | Self::Io(_)
            | Self::Connection(_)
            | Self::Database(_)
            | Self::Parse(_) => ErrorKind::Internal,
        }
    }

    #[must_use]
    pub fn is_user_error(&self) -> bool {
        self.kind() == ErrorKind::User
    }
}

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Database(err.to_string())
    }
}
