//! Hosted identity provider client
//!
//! Talks to a hosted authentication service over HTTPS. The issued
//! session is cached in the key-value store so later invocations can
//! resume it; `get_session` revalidates the cached token with the
//! provider and treats a rejected token as "not logged in".

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::Session;
use crate::ports::key_value::keys;
use crate::ports::{IdentityProvider, KeyValueStore};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Identity provider backed by a hosted HTTP service
pub struct HostedIdentity {
    client: reqwest::blocking::Client,
    base_url: Url,
    store: Arc<dyn KeyValueStore>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    display_name: &'a str,
    email: &'a str,
    secret: &'a str,
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    secret: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    email: String,
    display_name: String,
    token: String,
}

impl From<SessionResponse> for Session {
    fn from(response: SessionResponse) -> Self {
        Session {
            email: response.email,
            display_name: response.display_name,
            token: response.token,
        }
    }
}

impl HostedIdentity {
    /// Create a client for the given provider base URL
    pub fn new(base_url: &str, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid identity provider URL: {}", e)))?;
        if base_url.scheme() != "https" && base_url.host_str() != Some("localhost") {
            return Err(Error::Config(
                "identity provider URL must use HTTPS".to_string(),
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::provider(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            store,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint {}: {}", path, e)))
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::provider("connection timed out after 30 seconds")
        } else if error.is_connect() {
            Error::provider("unable to connect to the identity provider")
        } else {
            Error::provider(format!("identity provider request failed: {}", error))
        }
    }

    fn cache_session(&self, session: &Session) -> Result<()> {
        self.store.set(keys::SESSION, &serde_json::to_string(session)?)
    }

    fn cached_session(&self) -> Result<Option<Session>> {
        match self.store.get(keys::SESSION)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

impl IdentityProvider for HostedIdentity {
    fn name(&self) -> &str {
        "hosted"
    }

    fn sign_up(&self, display_name: &str, email: &str, secret: &str) -> Result<Session> {
        let response = self
            .client
            .post(self.endpoint("v1/signup")?)
            .json(&SignUpRequest {
                display_name,
                email,
                secret,
            })
            .send()
            .map_err(|e| self.map_request_error(e))?;

        match response.status().as_u16() {
            200 | 201 => {
                let session: Session = response
                    .json::<SessionResponse>()
                    .map_err(|e| self.map_request_error(e))?
                    .into();
                self.cache_session(&session)?;
                Ok(session)
            }
            409 => Err(Error::DuplicateAccount(email.trim().to_lowercase())),
            status => Err(Error::provider(format!("sign up failed: HTTP {}", status))),
        }
    }

    fn sign_in(&self, email: &str, secret: &str) -> Result<Session> {
        let response = self
            .client
            .post(self.endpoint("v1/signin")?)
            .json(&SignInRequest { email, secret })
            .send()
            .map_err(|e| self.map_request_error(e))?;

        match response.status().as_u16() {
            200 => {
                let session: Session = response
                    .json::<SessionResponse>()
                    .map_err(|e| self.map_request_error(e))?
                    .into();
                self.cache_session(&session)?;
                Ok(session)
            }
            401 | 403 => Err(Error::InvalidCredentials),
            status => Err(Error::provider(format!("sign in failed: HTTP {}", status))),
        }
    }

    fn sign_out(&self) -> Result<()> {
        if let Some(session) = self.cached_session()? {
            // Best effort: the local pointer is cleared even when the
            // provider cannot be reached.
            let _ = self
                .client
                .post(self.endpoint("v1/signout")?)
                .bearer_auth(&session.token)
                .send();
        }
        self.store.remove(keys::SESSION)
    }

    fn get_session(&self) -> Result<Option<Session>> {
        let Some(session) = self.cached_session()? else {
            return Ok(None);
        };

        let response = self
            .client
            .get(self.endpoint("v1/session")?)
            .bearer_auth(&session.token)
            .send()
            .map_err(|e| self.map_request_error(e))?;

        match response.status().as_u16() {
            200 => Ok(Some(session)),
            401 | 403 => {
                self.store.remove(keys::SESSION)?;
                Ok(None)
            }
            status => Err(Error::provider(format!(
                "session check failed: HTTP {}",
                status
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::json_store::JsonFileStore;

    fn store() -> Arc<dyn KeyValueStore> {
        let dir = tempfile::tempdir().unwrap();
        Arc::new(JsonFileStore::new(dir.path().join("store.json")))
    }

    #[test]
    fn test_rejects_plain_http_url() {
        let result = HostedIdentity::new("http://id.example.com", store());
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("HTTPS"));
    }

    #[test]
    fn test_allows_localhost_for_development() {
        assert!(HostedIdentity::new("http://localhost:9090", store()).is_ok());
    }

    #[test]
    fn test_rejects_garbage_url() {
        assert!(HostedIdentity::new("not a url", store()).is_err());
    }
}
