//! Adapter implementations of the ports
//!
//! Concrete collaborators: the JSON-file key-value store, the two
//! identity providers (local fallback and hosted HTTP) and the speech
//! stand-ins.

pub mod http_identity;
pub mod json_store;
pub mod local_identity;
pub mod null_speech;
pub mod scripted_speech;

pub use http_identity::HostedIdentity;
pub use json_store::JsonFileStore;
pub use local_identity::LocalIdentity;
pub use null_speech::{UnavailableRecognizer, UnavailableSynthesizer};
pub use scripted_speech::{RecordingSynthesizer, ScriptedRecognizer, SpeechCall};
