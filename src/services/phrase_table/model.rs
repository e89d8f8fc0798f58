use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    #[serde(alias = "source_lang")]
    pub source: String,
    #[serde(alias = "target_lang")]
    pub target: String,

    #[serde(alias = "original")]
    pub phrase: String,
    pub translation: String,
}

impl PhraseEntry {
    pub fn new(source: &str, target: &str, phrase: &str, translation: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            phrase: phrase.to_string(),
            translation: translation.to_string(),
        }
    }
}
