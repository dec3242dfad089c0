//! Narration service - spoken quote summaries
//!
//! Builds a linear script from the quote and hands it to the
//! text-to-speech port. Any queued speech is cancelled before a new
//! utterance starts, so at most one utterance is ever active: last
//! call wins.

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{format_money, QuoteDraft, QuoteTotals, Session};
use crate::ports::{SpeechSynthesizer, Voice};

/// Spoken summary orchestration over the synthesizer port
pub struct NarrationService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    preferred_voice: Option<String>,
}

impl NarrationService {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, preferred_voice: Option<String>) -> Self {
        Self {
            synthesizer,
            preferred_voice,
        }
    }

    /// Whether a speech engine is configured
    pub fn is_available(&self) -> bool {
        self.synthesizer.is_available()
    }

    /// Voices offered by the engine
    pub fn voices(&self) -> Result<Vec<Voice>> {
        self.synthesizer.list_voices()
    }

    /// Build the spoken script for a quote
    pub fn build_script(
        &self,
        session: &Session,
        draft: &QuoteDraft,
        totals: &QuoteTotals,
    ) -> String {
        let client_name = if draft.client.name.trim().is_empty() {
            "there".to_string()
        } else {
            draft.client.name.trim().to_string()
        };

        let mut sentences = vec![format!(
            "Hello {}. Here is your quote from {}.",
            client_name, session.display_name
        )];

        if !draft.job_description.trim().is_empty() {
            sentences.push(format!("Job description: {}.", draft.job_description.trim()));
        }

        for (index, item) in draft.ledger.rows().iter().enumerate() {
            let description = if item.description.trim().is_empty() {
                "unspecified item".to_string()
            } else {
                item.description.trim().to_string()
            };
            sentences.push(format!(
                "Item {}: {}, quantity {}, at {} dollars each, {} dollars.",
                index + 1,
                description,
                item.quantity.normalize(),
                format_money(item.unit_price),
                format_money(item.line_total()),
            ));
        }

        sentences.push(format!(
            "The subtotal is {} dollars. With margin and G S T the total comes to {} dollars.",
            format_money(totals.subtotal),
            format_money(totals.total),
        ));

        sentences.join(" ")
    }

    /// Speak the quote summary, cancelling any queued utterance first
    ///
    /// Voice resolution order: explicit override, configured preferred
    /// voice, first voice whose language tag starts with "en", engine
    /// default.
    pub fn narrate(
        &self,
        session: &Session,
        draft: &QuoteDraft,
        totals: &QuoteTotals,
        voice_override: Option<&str>,
    ) -> Result<()> {
        if !self.synthesizer.is_available() {
            return Err(Error::unavailable(
                "Speech synthesis",
                "no speech engine is configured on this system",
            ));
        }

        let script = self.build_script(session, draft, totals);
        let voice = self.resolve_voice(voice_override)?;

        self.synthesizer.cancel()?;
        self.synthesizer.speak(&script, voice.as_ref())
    }

    fn resolve_voice(&self, voice_override: Option<&str>) -> Result<Option<Voice>> {
        let voices = self.synthesizer.list_voices()?;

        for wanted in [voice_override, self.preferred_voice.as_deref()]
            .into_iter()
            .flatten()
        {
            if let Some(voice) = voices.iter().find(|v| v.name.eq_ignore_ascii_case(wanted)) {
                return Ok(Some(voice.clone()));
            }
        }

        Ok(voices
            .iter()
            .find(|v| v.language.to_lowercase().starts_with("en"))
            .cloned())
    }
}
