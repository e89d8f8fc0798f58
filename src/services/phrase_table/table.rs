use super::model::PhraseEntry;
use super::{normalize, seed, store};
use crate::error::ConfigError;
use crate::model::language;

use serde::Serialize;
use std::{collections::HashMap, path::Path};

type Pair = (String, String);

/// Immutable phrase lookup, keyed by language pair then normalized phrase.
#[derive(Debug)]
pub struct PhraseTable {
    pairs: HashMap<Pair, HashMap<String, String>>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PairSummary {
    pub source: String,
    pub target: String,
    pub phrases: usize,
}

impl PhraseTable {
    /// Later entries win over earlier ones with the same key. Entries the
    /// resolver could never serve (bad codes, same-language pairs) are skipped.
    pub fn from_entries(entries: impl IntoIterator<Item = PhraseEntry>) -> Self {
        let mut pairs: HashMap<Pair, HashMap<String, String>> = HashMap::new();

        for e in entries {
            let key = normalize::key(&e.phrase);
            let translation = e.translation.trim();

            if key.is_empty() || translation.is_empty() {
                tracing::warn!(
                    source = %e.source,
                    target = %e.target,
                    phrase = %e.phrase,
                    "skipping phrase entry with empty phrase or translation"
                );
                continue;
            }

            if !language::is_valid_code(&e.source)
                || !language::is_valid_code(&e.target)
                || e.source == e.target
            {
                tracing::warn!(
                    source = %e.source,
                    target = %e.target,
                    phrase = %e.phrase,
                    "skipping phrase entry with unusable language pair"
                );
                continue;
            }

            let map = pairs.entry((e.source, e.target)).or_default();
            if let Some(previous) = map.insert(key.clone(), translation.to_string()) {
                tracing::debug!(phrase = %key, %previous, "phrase entry overridden");
            }
        }

        Self { pairs }
    }

    /// Built-in seed only.
    pub fn seeded() -> Self {
        Self::from_entries(seed::entries())
    }

    /// Built-in seed plus the entries of a JSON phrase file.
    pub fn seeded_with_file(path: &Path) -> Result<Self, ConfigError> {
        let mut entries = seed::entries();
        entries.extend(store::load(path)?);
        Ok(Self::from_entries(entries))
    }

    pub fn lookup(&self, source: &str, target: &str, text: &str) -> Option<&str> {
        let key = normalize::key(text);
        if key.is_empty() {
            return None;
        }

        self.pairs
            .get(&(source.to_string(), target.to_string()))
            .and_then(|m| m.get(&key))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Language pairs present in the table, sorted by (source, target).
    pub fn pairs(&self) -> Vec<PairSummary> {
        let mut out: Vec<PairSummary> = self
            .pairs
            .iter()
            .map(|((source, target), m)| PairSummary {
                source: source.clone(),
                target: target.clone(),
                phrases: m.len(),
            })
            .collect();

        out.sort_by(|a, b| (a.source.as_str(), a.target.as_str()).cmp(&(b.source.as_str(), b.target.as_str())));
        out
    }
}
