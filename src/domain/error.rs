//! Domain validation errors for core domain types.
//!
//! These errors are returned by `validate` methods when caller-supplied
//! input violates a domain rule. They are always user-correctable.
//!
//! # Examples
//!
//! ```
//! use wagerbook::domain::error::DomainError;
//! use wagerbook::domain::wager::WagerRequest;
//! use rust_decimal::Decimal;
//!
//! let request = WagerRequest::new(Decimal::TEN, vec![]);
//! assert!(matches!(request.validate(), Err(DomainError::EmptyLegs)));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Wager stake must be positive.
    #[error("stake must be positive, got {stake}")]
    NonPositiveStake {
        /// The invalid stake that was provided.
        stake: Decimal,
    },

    /// Deposit amount must be positive.
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The invalid amount that was provided.
        amount: Decimal,
    },

    /// Crediting the amount would push the balance past what a decimal holds.
    #[error("amount {amount} is out of range for balance {balance}")]
    AmountOutOfRange {
        /// Balance before the credit.
        balance: Decimal,
        /// The amount that could not be added.
        amount: Decimal,
    },

    /// Offer ids are positive integers.
    #[error("offer id must be positive, got {id}")]
    NonPositiveOfferId {
        /// The invalid id.
        id: i32,
    },

    /// Prices are odds and must be positive.
    #[error("price for '{name}' must be positive, got {value}")]
    NonPositivePrice {
        /// Market name of the offending price.
        name: String,
        /// The invalid value.
        value: Decimal,
    },

    /// A wager needs at least one leg.
    #[error("legs cannot be empty")]
    EmptyLegs,

    /// A required text field was blank.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the blank field.
        field: &'static str,
    },
}
