//! Speech ports
//!
//! Interfaces to the platform speech subsystems. Both degrade
//! gracefully: an adapter that has no engine behind it returns
//! `Error::CapabilityUnavailable` and the rest of the system keeps
//! working.

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

/// A synthesizer voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    /// BCP 47 language tag, e.g. "en-AU"
    pub language: String,
}

/// Speech-to-text provider
///
/// Recognition uses the fixed locale in `config::SPEECH_LOCALE`,
/// returns only final results and only the best alternative.
pub trait SpeechRecognizer: Send + Sync {
    /// Whether an engine is configured
    fn is_available(&self) -> bool;

    /// Capture one utterance and return its transcript
    fn recognize(&self) -> Result<String>;
}

/// Text-to-speech provider
pub trait SpeechSynthesizer: Send + Sync {
    /// Whether an engine is configured
    fn is_available(&self) -> bool;

    /// Voices offered by the engine; may be empty
    fn list_voices(&self) -> Result<Vec<Voice>>;

    /// Queue an utterance on the given voice (None = engine default)
    fn speak(&self, text: &str, voice: Option<&Voice>) -> Result<()>;

    /// Cancel any queued or playing utterance; idempotent
    fn cancel(&self) -> Result<()>;
}
