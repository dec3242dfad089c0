//! Identity provider port
//!
//! Defines the interface for authentication. Two implementations
//! exist: the hosted HTTP provider and the local credential store over
//! the key-value blob. Callers never learn which one they are talking
//! to.

use crate::domain::result::Result;
use crate::domain::Session;

/// Authentication provider trait
///
/// Calls are synchronous from the caller's perspective; a remote
/// implementation blocks on the network round-trip. Each operation is
/// gated by a single user action, so there is never more than one
/// in-flight call per provider.
pub trait IdentityProvider: Send + Sync {
    /// Provider name (e.g., "local", "hosted")
    fn name(&self) -> &str;

    /// Create an account and log it in
    ///
    /// Fails with `Error::DuplicateAccount` when the email is already
    /// registered (case-insensitive).
    fn sign_up(&self, display_name: &str, email: &str, secret: &str) -> Result<Session>;

    /// Authenticate an existing account
    ///
    /// Fails with `Error::InvalidCredentials` for unknown email or
    /// wrong secret alike.
    fn sign_in(&self, email: &str, secret: &str) -> Result<Session>;

    /// End the current session; idempotent
    fn sign_out(&self) -> Result<()>;

    /// Current session, if any
    fn get_session(&self) -> Result<Option<Session>>;
}
