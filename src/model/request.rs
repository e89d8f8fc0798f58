use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: String,

    #[serde(default, alias = "source_lang")]
    pub source: String,

    #[serde(default, alias = "target_lang")]
    pub target: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Which tier produced a translation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Remote,
    Fallback,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub text: String,
    pub origin: Origin,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl TranslationResult {
    pub fn remote(text: String, provider: &str) -> Self {
        Self {
            text,
            origin: Origin::Remote,
            provider: Some(provider.to_string()),
        }
    }

    pub fn fallback(text: String) -> Self {
        Self {
            text,
            origin: Origin::Fallback,
            provider: None,
        }
    }
}
