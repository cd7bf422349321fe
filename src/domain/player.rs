//! Player accounts.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::{Amount, PlayerId};

/// A registered player and their account balance.
///
/// The password is stored as supplied and never serialized back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub balance: Amount,
}

/// Registration input.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlayer {
    pub username: String,
    pub password: String,
}

impl NewPlayer {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// # Errors
    /// Returns [`DomainError::EmptyField`] for a blank username or password.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.username.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "username" });
        }
        if self.password.is_empty() {
            return Err(DomainError::EmptyField { field: "password" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn blank_username_is_rejected() {
        let player = NewPlayer::new(" ", "secret");
        assert_eq!(
            player.validate(),
            Err(DomainError::EmptyField { field: "username" })
        );
    }

    #[test]
    fn empty_password_is_rejected() {
        let player = NewPlayer::new("ana", "");
        assert_eq!(
            player.validate(),
            Err(DomainError::EmptyField { field: "password" })
        );
    }

    #[test]
    fn password_is_not_serialized() {
        let player = Player {
            id: 1,
            username: "ana".into(),
            password: "secret".into(),
            balance: dec!(10.50),
        };
        let json = serde_json::to_string(&player).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"balance\":\"10.50\""));
    }
}
