//! Account domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user of the quoting tool
///
/// Created on registration, read on login, never mutated afterwards.
/// The credential store is the sole writer. The secret is stored
/// verbatim: this account map is an explicit local fallback used only
/// when no hosted identity provider is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Lowercased email, the unique account identifier
    pub email: String,
    pub display_name: String,
    pub secret: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a normalized email
    pub fn new(
        display_name: impl Into<String>,
        email: &str,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            email: Self::normalize_email(email),
            display_name: display_name.into(),
            secret: secret.into(),
            created_at: Utc::now(),
        }
    }

    /// Normalize an email for case-insensitive matching
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Validate account data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() {
            return Err("email cannot be empty");
        }
        if !self.email.contains('@') {
            return Err("email must contain '@'");
        }
        if self.secret.is_empty() {
            return Err("password cannot be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_normalization() {
        assert_eq!(Account::normalize_email("Alice@X.COM"), "alice@x.com");
        assert_eq!(Account::normalize_email(" a@x.com "), "a@x.com");
    }

    #[test]
    fn test_account_validation() {
        let mut account = Account::new("Alice", "a@x.com", "pw1");
        assert!(account.validate().is_ok());

        account.email = "".to_string();
        assert!(account.validate().is_err());

        let no_at = Account::new("Bob", "not-an-email", "pw");
        assert!(no_at.validate().is_err());
    }
}
