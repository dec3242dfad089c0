//! Session domain model

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Proof of authentication for the current user
///
/// Created at login, destroyed at logout. Held explicitly by callers
/// rather than read from ambient global state; the auth service is the
/// only component that loads or stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Normalized email of the authenticated account
    pub email: String,
    pub display_name: String,
    /// Opaque token; meaningful only to the provider that issued it
    pub token: String,
}

impl Session {
    /// Create a session with a freshly generated local token
    pub fn new_local(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            token: generate_token(),
        }
    }
}

/// Generate a random url-safe session token
fn generate_token() -> String {
    let mut bytes = [0u8; 24];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let a = Session::new_local("a@x.com", "Alice");
        let b = Session::new_local("a@x.com", "Alice");
        assert_ne!(a.token, b.token);
        assert!(!a.token.is_empty());
    }
}
