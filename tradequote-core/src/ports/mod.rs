//! Port definitions - trait abstractions for external collaborators
//!
//! The identity provider, the key-value blob, and the speech
//! subsystems are all outside the core. Services depend on these
//! traits; adapters provide the concrete implementations.

pub mod identity;
pub mod key_value;
pub mod speech;

pub use identity::IdentityProvider;
pub use key_value::KeyValueStore;
pub use speech::{SpeechRecognizer, SpeechSynthesizer, Voice};
