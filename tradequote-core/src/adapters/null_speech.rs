//! Unavailable speech adapters
//!
//! Used when no speech engine is wired in. Callers can check
//! `is_available` up front to disable the affected command with a
//! status message; calling through anyway returns
//! `Error::CapabilityUnavailable` and nothing else breaks.

use crate::domain::result::{Error, Result};
use crate::ports::{SpeechRecognizer, SpeechSynthesizer, Voice};

/// Speech-to-text stand-in with no engine behind it
#[derive(Debug, Default)]
pub struct UnavailableRecognizer;

impl SpeechRecognizer for UnavailableRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    fn recognize(&self) -> Result<String> {
        Err(Error::unavailable(
            "Speech recognition",
            "no speech engine is configured on this system",
        ))
    }
}

/// Text-to-speech stand-in with no engine behind it
#[derive(Debug, Default)]
pub struct UnavailableSynthesizer;

impl SpeechSynthesizer for UnavailableSynthesizer {
    fn is_available(&self) -> bool {
        false
    }

    fn list_voices(&self) -> Result<Vec<Voice>> {
        Ok(Vec::new())
    }

    fn speak(&self, _text: &str, _voice: Option<&Voice>) -> Result<()> {
        Err(Error::unavailable(
            "Speech synthesis",
            "no speech engine is configured on this system",
        ))
    }

    fn cancel(&self) -> Result<()> {
        Ok(())
    }
}
