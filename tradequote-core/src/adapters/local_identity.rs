//! Local credential store
//!
//! The fallback identity provider used when no hosted provider is
//! configured: an account map and a session pointer in the key-value
//! blob. Secrets are stored and compared verbatim; this is an explicit
//! local-fallback mechanism, not a hardened credential system.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, Session};
use crate::ports::key_value::keys;
use crate::ports::{IdentityProvider, KeyValueStore};

/// Identity provider backed by the local key-value store
pub struct LocalIdentity {
    store: Arc<dyn KeyValueStore>,
}

impl LocalIdentity {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load_accounts(&self) -> Result<BTreeMap<String, Account>> {
        match self.store.get(keys::ACCOUNTS)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(BTreeMap::new()),
        }
    }

    fn save_accounts(&self, accounts: &BTreeMap<String, Account>) -> Result<()> {
        self.store
            .set(keys::ACCOUNTS, &serde_json::to_string(accounts)?)
    }

    fn store_session(&self, session: &Session) -> Result<()> {
        self.store.set(keys::SESSION, &serde_json::to_string(session)?)
    }
}

impl IdentityProvider for LocalIdentity {
    fn name(&self) -> &str {
        "local"
    }

    fn sign_up(&self, display_name: &str, email: &str, secret: &str) -> Result<Session> {
        let account = Account::new(display_name, email, secret);
        account.validate().map_err(Error::validation)?;

        let mut accounts = self.load_accounts()?;
        if accounts.contains_key(&account.email) {
            return Err(Error::DuplicateAccount(account.email));
        }

        let session = Session::new_local(account.email.clone(), account.display_name.clone());
        accounts.insert(account.email.clone(), account);
        self.save_accounts(&accounts)?;
        self.store_session(&session)?;
        Ok(session)
    }

    fn sign_in(&self, email: &str, secret: &str) -> Result<Session> {
        let accounts = self.load_accounts()?;
        let account = accounts
            .get(&Account::normalize_email(email))
            .ok_or(Error::InvalidCredentials)?;
        if account.secret != secret {
            return Err(Error::InvalidCredentials);
        }

        let session = Session::new_local(account.email.clone(), account.display_name.clone());
        self.store_session(&session)?;
        Ok(session)
    }

    fn sign_out(&self) -> Result<()> {
        self.store.remove(keys::SESSION)
    }

    fn get_session(&self) -> Result<Option<Session>> {
        match self.store.get(keys::SESSION)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}
