use thiserror::Error;

/// Failures surfaced to callers of the resolver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Empty text, identical languages or a malformed language code.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Neither the remote provider nor the phrase table had a translation.
    #[error("translation unavailable for {source_lang} -> {target_lang}")]
    TranslationUnavailable {
        source_lang: String,
        target_lang: String,
    },
}

impl ResolveError {
    /// Stable code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::InvalidInput(_) => "invalid_input",
            ResolveError::TranslationUnavailable { .. } => "translation_unavailable",
        }
    }
}

/// Failures talking to a remote provider. Never surfaced by `resolve`.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response carried no translation")]
    MissingTranslation,
}

/// Startup failures: config file or phrase file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
