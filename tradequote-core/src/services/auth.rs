//! Auth service - registration, login and the session gate

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::Session;
use crate::ports::IdentityProvider;

/// Authentication orchestration over whichever identity provider is
/// configured
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Name of the active provider ("local" or "hosted")
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Register a new account and log it in
    pub fn register(&self, display_name: &str, email: &str, secret: &str) -> Result<Session> {
        self.provider.sign_up(display_name, email, secret)
    }

    /// Log in to an existing account
    pub fn login(&self, email: &str, secret: &str) -> Result<Session> {
        self.provider.sign_in(email, secret)
    }

    /// Log out; idempotent
    pub fn logout(&self) -> Result<()> {
        self.provider.sign_out()
    }

    /// Current session, if any
    pub fn current_session(&self) -> Result<Option<Session>> {
        self.provider.get_session()
    }

    /// Session gate: every quote-editing and export operation passes
    /// through here
    ///
    /// A provider failure maps to `NotAuthenticated` - the caller is
    /// sent back to login rather than offered a retry.
    pub fn require_session(&self) -> Result<Session> {
        match self.provider.get_session() {
            Ok(Some(session)) => Ok(session),
            Ok(None) => Err(Error::NotAuthenticated),
            Err(Error::Provider(_)) => Err(Error::NotAuthenticated),
            Err(other) => Err(other),
        }
    }
}
