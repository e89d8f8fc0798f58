//! Process configuration, read from a TOML file.
//!
//! ```toml
//! [remote]
//! provider = "libretranslate"   # or "mymemory", "none"
//! endpoint = "https://libretranslate.de/translate"
//! api_key = ""
//! timeout_secs = 10
//!
//! [phrases]
//! file = "phrases.json"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "LINGO_CONFIG";
pub const API_KEY_ENV: &str = "LINGO_API_KEY";
pub const DEFAULT_CONFIG_FILE: &str = "lingo.toml";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub phrases: PhrasesConfig,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    LibreTranslate,
    MyMemory,
    None,
}

impl ProviderKind {
    pub fn default_endpoint(self) -> &'static str {
        match self {
            ProviderKind::LibreTranslate => "https://libretranslate.de/translate",
            ProviderKind::MyMemory => "https://api.mymemory.translated.net/get",
            ProviderKind::None => "",
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemoteConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    /// Overrides the provider's public endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Contact address sent to MyMemory for a higher free quota.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            endpoint: None,
            api_key: None,
            email: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PhrasesConfig {
    /// Extra JSON phrase entries layered over the built-in table.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Config {
    /// A file named by `LINGO_CONFIG` must exist; the implicit
    /// `lingo.toml` in the working directory may be absent.
    pub fn load_from_env() -> Result<Config, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_required(Path::new(&path)),
            None => Self::load(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Loads from `path` if it exists, otherwise returns defaults.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        Self::load_required(path)
    }

    /// Loads from `path`; a missing file is an error.
    pub fn load_required(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
        let mut config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        // Relative phrase files resolve against the config file's directory.
        if let Some(file) = config.phrases.file.as_mut() {
            if file.is_relative() {
                if let Some(parent) = path.parent() {
                    *file = parent.join(&*file);
                }
            }
        }

        Ok(config)
    }

    /// Applies `LINGO_API_KEY` when set and non-empty.
    pub fn apply_env(mut self) -> Self {
        self.apply_api_key(std::env::var(API_KEY_ENV).ok());
        self
    }

    fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.remote.api_key = Some(key);
        }
    }
}
