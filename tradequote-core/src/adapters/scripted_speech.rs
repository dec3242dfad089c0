//! Scripted speech adapters for testing
//!
//! Trait-level doubles for the speech ports: a recognizer that replays
//! canned transcripts and a synthesizer that records every call so
//! tests can assert on ordering (in particular that cancel always
//! precedes speak).

use std::sync::Mutex;

use crate::domain::result::{Error, Result};
use crate::ports::{SpeechRecognizer, SpeechSynthesizer, Voice};

/// Recognizer that returns preset transcripts in order
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    transcripts: Mutex<Vec<String>>,
}

impl ScriptedRecognizer {
    pub fn new(transcripts: Vec<String>) -> Self {
        Self {
            transcripts: Mutex::new(transcripts),
        }
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    fn recognize(&self) -> Result<String> {
        let mut transcripts = self.transcripts.lock().expect("poisoned");
        if transcripts.is_empty() {
            return Err(Error::unavailable(
                "Speech recognition",
                "no more scripted transcripts",
            ));
        }
        Ok(transcripts.remove(0))
    }
}

/// A call observed by the recording synthesizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechCall {
    Cancel,
    Speak { text: String, voice: Option<String> },
}

/// Synthesizer that records calls instead of producing audio
#[derive(Debug, Default)]
pub struct RecordingSynthesizer {
    voices: Vec<Voice>,
    calls: Mutex<Vec<SpeechCall>>,
}

impl RecordingSynthesizer {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls observed so far, in order
    pub fn calls(&self) -> Vec<SpeechCall> {
        self.calls.lock().expect("poisoned").clone()
    }
}

impl SpeechSynthesizer for RecordingSynthesizer {
    fn is_available(&self) -> bool {
        true
    }

    fn list_voices(&self) -> Result<Vec<Voice>> {
        Ok(self.voices.clone())
    }

    fn speak(&self, text: &str, voice: Option<&Voice>) -> Result<()> {
        self.calls.lock().expect("poisoned").push(SpeechCall::Speak {
            text: text.to_string(),
            voice: voice.map(|v| v.name.clone()),
        });
        Ok(())
    }

    fn cancel(&self) -> Result<()> {
        self.calls.lock().expect("poisoned").push(SpeechCall::Cancel);
        Ok(())
    }
}
