//! Translation settings, embedded in the application config file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Which transform to apply to generated notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Offline,
    Remote,
}

impl Provider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Remote => "remote",
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "offline" => Ok(Self::Offline),
            "remote" => Ok(Self::Remote),
            other => Err(format!("unknown provider: {other} (expected offline or remote)")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default)]
    pub provider: Provider,

    /// Base URL of a LibreTranslate-compatible service.
    #[serde(default = "TranslationConfig::default_endpoint")]
    pub endpoint: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "TranslationConfig::default_source")]
    pub source: String,

    #[serde(default = "TranslationConfig::default_target")]
    pub target: String,

    /// Request timeout (seconds)
    #[serde(default = "TranslationConfig::default_timeout")]
    pub timeout_secs: u64,

    /// Extra glossary entries, English term to French term.
    #[serde(default)]
    pub glossary: BTreeMap<String, String>,
}

impl TranslationConfig {
    fn default_endpoint() -> String {
        "http://localhost:5000".to_string()
    }

    fn default_source() -> String {
        "en".to_string()
    }

    fn default_target() -> String {
        "fr".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            endpoint: Self::default_endpoint(),
            api_key: None,
            source: Self::default_source(),
            target: Self::default_target(),
            timeout_secs: Self::default_timeout(),
            glossary: BTreeMap::new(),
        }
    }
}
