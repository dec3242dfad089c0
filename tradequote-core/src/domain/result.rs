//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Login failures deliberately collapse "unknown email" and "wrong
/// password" into the single `InvalidCredentials` variant so callers
/// cannot enumerate accounts.
#[derive(Error, Debug)]
pub enum Error {
    #[error("An account already exists for {0}")]
    DuplicateAccount(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("{0} is not available: {1}")]
    CapabilityUnavailable(&'static str, String),

    #[error("Identity provider error: {0}")]
    Provider(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create an identity provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a capability-unavailable error
    pub fn unavailable(capability: &'static str, reason: impl Into<String>) -> Self {
        Self::CapabilityUnavailable(capability, reason.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // The message must not leak whether the email exists
        assert_eq!(Error::InvalidCredentials.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_duplicate_account_names_the_email() {
        let err = Error::DuplicateAccount("a@x.com".to_string());
        assert!(err.to_string().contains("a@x.com"));
    }

    #[test]
    fn test_unavailable_helper() {
        let err = Error::unavailable("Speech recognition", "no recognizer configured");
        assert!(err
            .to_string()
            .starts_with("Speech recognition is not available"));
    }
}
