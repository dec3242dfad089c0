//! Key-value store port
//!
//! The only persistence surface in the system: a local blob of string
//! keys to string values. Backs the credential store, the session
//! pointer and the working quote draft.

use crate::domain::result::Result;

/// Local key-value storage abstraction
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key, None when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value, replacing any existing one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; a no-op when absent
    fn remove(&self, key: &str) -> Result<()>;
}

/// Well-known store keys
pub mod keys {
    /// JSON map of normalized email -> Account
    pub const ACCOUNTS: &str = "accounts";
    /// JSON Session for the currently logged-in user
    pub const SESSION: &str = "session";
    /// JSON QuoteDraft being edited
    pub const DRAFT: &str = "draft";
}
