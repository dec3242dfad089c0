//! Configuration management
//!
//! Settings live in `settings.json` inside the tradequote directory:
//! ```json
//! {
//!   "app": { "identityProviderUrl": null, "preferredVoice": null, ... }
//! }
//! ```
//! Unknown fields are preserved on save so other tools sharing the
//! file keep their settings.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GST applied to the margin-adjusted subtotal: 10%
///
/// The one real business rule in the system. Kept as a single named
/// constant so it is auditable and testable in isolation.
pub const GST_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Locale for speech recognition
pub const SPEECH_LOCALE: &str = "en-AU";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    identity_provider_url: Option<String>,
    #[serde(default)]
    preferred_voice: Option<String>,
    #[serde(default)]
    default_recipient: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Tradequote configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base URL of a hosted identity provider; local credential store
    /// is used when absent
    pub identity_provider_url: Option<String>,
    /// Preferred voice name for spoken summaries
    pub preferred_voice: Option<String>,
    /// Default email recipient for the email export
    pub default_recipient: Option<String>,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Config {
    /// Load config from the tradequote directory
    ///
    /// The identity provider can also be set via the
    /// TRADEQUOTE_IDENTITY_URL environment variable (for CI/testing);
    /// it takes precedence over the settings file.
    pub fn load(tradequote_dir: &Path) -> Result<Self> {
        let settings_path = tradequote_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let identity_provider_url = std::env::var("TRADEQUOTE_IDENTITY_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| raw.app.identity_provider_url.clone());

        Ok(Self {
            identity_provider_url,
            preferred_voice: raw.app.preferred_voice.clone(),
            default_recipient: raw.app.default_recipient.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the tradequote directory
    /// Preserves other settings that the CLI doesn't manage
    pub fn save(&self, tradequote_dir: &Path) -> Result<()> {
        let settings_path = tradequote_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.identity_provider_url = self.identity_provider_url.clone();
        settings.app.preferred_voice = self.preferred_voice.clone();
        settings.app.default_recipient = self.default_recipient.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_rate_is_ten_percent() {
        assert_eq!(GST_RATE.to_string(), "0.10");
    }

    #[test]
    fn test_missing_settings_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.identity_provider_url.is_none());
        assert!(config.preferred_voice.is_none());
    }

    #[test]
    fn test_save_preserves_unmanaged_fields() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        std::fs::write(
            &settings_path,
            r#"{"app":{"preferredVoice":"Karen","theme":"dark"},"desktop":{"zoom":2}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.preferred_voice.as_deref(), Some("Karen"));
        config.save(dir.path()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&settings_path).unwrap()).unwrap();
        assert_eq!(written["app"]["theme"], "dark");
        assert_eq!(written["desktop"]["zoom"], 2);
        assert_eq!(written["app"]["preferredVoice"], "Karen");
    }
}
