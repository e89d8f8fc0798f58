use crate::error::ResolveError;
use crate::model::language::{self, AUTO};
use crate::model::request::{TranslationRequest, TranslationResult};
use crate::services::phrase_table::PhraseTable;
use crate::services::remote::RemoteProvider;

use std::sync::Arc;

/// Two-tier translation: remote provider first, phrase table on any
/// remote failure. Holds no mutable state; share it freely across threads.
pub struct Resolver {
    remote: Option<Box<dyn RemoteProvider>>,
    phrases: Arc<PhraseTable>,
}

impl Resolver {
    pub fn new(remote: Option<Box<dyn RemoteProvider>>, phrases: Arc<PhraseTable>) -> Self {
        Self { remote, phrases }
    }

    /// Phrase table only; never touches the network.
    pub fn offline(phrases: Arc<PhraseTable>) -> Self {
        Self::new(None, phrases)
    }

    pub fn phrases(&self) -> &PhraseTable {
        &self.phrases
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.remote.as_deref().map(|p| p.name())
    }

    pub fn resolve(&self, req: &TranslationRequest) -> Result<TranslationResult, ResolveError> {
        let text = req.text.trim();
        validate(text, &req.source, &req.target)?;

        if let Some(remote) = self.remote.as_deref() {
            match remote.translate(text, &req.source, &req.target) {
                Ok(translated) => return Ok(TranslationResult::remote(translated, remote.name())),
                Err(e) => {
                    tracing::warn!(
                        provider = remote.name(),
                        source = %req.source,
                        target = %req.target,
                        error = %e,
                        "remote translation failed, trying phrase table"
                    );
                }
            }
        } else {
            tracing::debug!("no remote provider, going straight to phrase table");
        }

        match self.phrases.lookup(&req.source, &req.target, text) {
            Some(hit) => Ok(TranslationResult::fallback(hit.to_string())),
            None => Err(ResolveError::TranslationUnavailable {
                source_lang: req.source.clone(),
                target_lang: req.target.clone(),
            }),
        }
    }
}

fn validate(text: &str, source: &str, target: &str) -> Result<(), ResolveError> {
    if text.is_empty() {
        return Err(ResolveError::InvalidInput("text must not be empty".into()));
    }

    if source == target {
        return Err(ResolveError::InvalidInput(
            "source and target languages must differ".into(),
        ));
    }

    if !language::is_valid_source(source) {
        return Err(ResolveError::InvalidInput(format!(
            "invalid source language code: {source:?}"
        )));
    }

    if target == AUTO || !language::is_valid_code(target) {
        return Err(ResolveError::InvalidInput(format!(
            "invalid target language code: {target:?}"
        )));
    }

    Ok(())
}
