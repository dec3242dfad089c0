//! Tradequote Core - Business logic for the quoting tool
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Account, Ledger, QuoteTotals, etc.)
//! - **ports**: Trait definitions for external collaborators (identity, key-value store, speech)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (JSON store, local/hosted identity, speech stand-ins)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{HostedIdentity, JsonFileStore, LocalIdentity, UnavailableRecognizer, UnavailableSynthesizer};
use config::Config;
use ports::{IdentityProvider, KeyValueStore, SpeechRecognizer, SpeechSynthesizer};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result as CoreResult};
pub use domain::{
    compute_totals, format_money, Account, ClientInfo, Ledger, LineItem, LineItemField,
    QuoteDraft, QuoteTotals, Session,
};

/// Main context for tradequote operations
///
/// This is the primary entry point for all business logic. It holds
/// the key-value store, configuration, and all services. The identity
/// provider is chosen from configuration: hosted when a provider URL
/// is set, the local credential store otherwise.
pub struct QuoteContext {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub recognizer: Arc<dyn SpeechRecognizer>,
    pub auth_service: AuthService,
    pub quote_service: QuoteService,
    pub document_service: DocumentService,
    pub narration_service: NarrationService,
    pub email_service: EmailService,
}

impl QuoteContext {
    /// Create a new context rooted at the tradequote directory
    ///
    /// Speech ports default to unavailable stand-ins; use
    /// [`QuoteContext::with_speech`] to wire real engines in.
    pub fn new(tradequote_dir: &Path) -> Result<Self> {
        let config = Config::load(tradequote_dir)?;
        let store: Arc<dyn KeyValueStore> =
            Arc::new(JsonFileStore::new(tradequote_dir.join("store.json")));

        let identity: Arc<dyn IdentityProvider> = match &config.identity_provider_url {
            Some(url) => Arc::new(HostedIdentity::new(url, Arc::clone(&store))?),
            None => Arc::new(LocalIdentity::new(Arc::clone(&store))),
        };

        let recognizer: Arc<dyn SpeechRecognizer> = Arc::new(UnavailableRecognizer);
        let synthesizer: Arc<dyn SpeechSynthesizer> = Arc::new(UnavailableSynthesizer);

        let auth_service = AuthService::new(identity);
        let quote_service = QuoteService::new(Arc::clone(&store));
        let document_service = DocumentService::new();
        let narration_service = NarrationService::new(synthesizer, config.preferred_voice.clone());
        let email_service = EmailService::new();

        Ok(Self {
            config,
            store,
            recognizer,
            auth_service,
            quote_service,
            document_service,
            narration_service,
            email_service,
        })
    }

    /// Replace the speech ports with real engine adapters
    pub fn with_speech(
        mut self,
        recognizer: Arc<dyn SpeechRecognizer>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        self.recognizer = recognizer;
        self.narration_service =
            NarrationService::new(synthesizer, self.config.preferred_voice.clone());
        self
    }
}
