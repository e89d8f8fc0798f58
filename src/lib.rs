pub mod config;
pub mod error;
pub mod model;
pub mod protocol;
pub mod services;

pub use error::{ConfigError, RemoteError, ResolveError};
pub use model::request::{Origin, TranslationRequest, TranslationResult};
pub use services::resolver::Resolver;

use std::sync::Arc;

use services::phrase_table::PhraseTable;

/// Builds a resolver from config: remote provider plus phrase table.
pub fn build_resolver(cfg: &config::Config) -> Result<Resolver, ConfigError> {
    let phrases = match cfg.phrases.file.as_deref() {
        Some(path) => PhraseTable::seeded_with_file(path)?,
        None => PhraseTable::seeded(),
    };
    tracing::info!(phrases = phrases.len(), pairs = phrases.pairs().len(), "phrase table loaded");

    let remote = services::remote::from_config(&cfg.remote)?;

    Ok(Resolver::new(remote, Arc::new(phrases)))
}
