//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::voice::{Language, ListenTimeout};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub language: Option<String>,
    pub voice_mode: Option<bool>,
    pub listen_timeout: Option<String>,
    pub rate_per_hour: Option<f64>,
    pub web_fallback: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            language: Some(Language::default().tag().to_string()),
            voice_mode: Some(true),
            listen_timeout: Some(ListenTimeout::default().to_string()),
            rate_per_hour: Some(0.0),
            web_fallback: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            language: other.language.or(self.language),
            voice_mode: other.voice_mode.or(self.voice_mode),
            listen_timeout: other.listen_timeout.or(self.listen_timeout),
            rate_per_hour: other.rate_per_hour.or(self.rate_per_hour),
            web_fallback: other.web_fallback.or(self.web_fallback),
        }
    }

    /// Get language as parsed Language, or default if not set/invalid
    pub fn language_or_default(&self) -> Language {
        self.language
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get voice mode, or true if not set
    pub fn voice_mode_or_default(&self) -> bool {
        self.voice_mode.unwrap_or(true)
    }

    /// Get listen timeout as parsed ListenTimeout, or default if not set/invalid
    pub fn listen_timeout_or_default(&self) -> ListenTimeout {
        self.listen_timeout
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get rate per hour, or 0 if not set or negative
    pub fn rate_per_hour_or_default(&self) -> f64 {
        self.rate_per_hour
            .filter(|r| r.is_finite() && *r >= 0.0)
            .unwrap_or(0.0)
    }

    /// Get web fallback setting, or false if not set
    pub fn web_fallback_or_default(&self) -> bool {
        self.web_fallback.unwrap_or(false)
    }
}
