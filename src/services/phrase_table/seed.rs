use super::model::PhraseEntry;

// (source, target, phrase, translation)
const SEED: &[(&str, &str, &str, &str)] = &[
    // English -> Kinyarwanda
    ("en", "rw", "hello", "muraho"),
    ("en", "rw", "good morning", "mwaramutse"),
    ("en", "rw", "good afternoon", "mwiriwe"),
    ("en", "rw", "good night", "ijoro ryiza"),
    ("en", "rw", "how are you", "amakuru"),
    ("en", "rw", "thank you", "murakoze"),
    ("en", "rw", "goodbye", "murabeho"),
    ("en", "rw", "welcome", "murakaza neza"),
    ("en", "rw", "yes", "yego"),
    ("en", "rw", "no", "oya"),
    ("en", "rw", "sorry", "mbabarira"),
    ("en", "rw", "water", "amazi"),
    // Kinyarwanda -> English
    ("rw", "en", "muraho", "hello"),
    ("rw", "en", "mwaramutse", "good morning"),
    ("rw", "en", "mwiriwe", "good afternoon"),
    ("rw", "en", "ijoro ryiza", "good night"),
    ("rw", "en", "amakuru", "how are you"),
    ("rw", "en", "murakoze", "thank you"),
    ("rw", "en", "murabeho", "goodbye"),
    ("rw", "en", "murakaza neza", "welcome"),
    ("rw", "en", "yego", "yes"),
    ("rw", "en", "oya", "no"),
    ("rw", "en", "mbabarira", "sorry"),
    ("rw", "en", "amazi", "water"),
    // English -> French
    ("en", "fr", "hello", "bonjour"),
    ("en", "fr", "good night", "bonne nuit"),
    ("en", "fr", "how are you", "comment allez-vous"),
    ("en", "fr", "thank you", "merci"),
    ("en", "fr", "goodbye", "au revoir"),
    ("en", "fr", "yes", "oui"),
    ("en", "fr", "no", "non"),
    // English -> Swahili
    ("en", "sw", "hello", "jambo"),
    ("en", "sw", "thank you", "asante"),
    ("en", "sw", "goodbye", "kwaheri"),
    ("en", "sw", "welcome", "karibu"),
    ("en", "sw", "yes", "ndiyo"),
    ("en", "sw", "no", "hapana"),
];

pub fn entries() -> Vec<PhraseEntry> {
    SEED.iter()
        .map(|(s, t, p, tr)| PhraseEntry::new(s, t, p, tr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::phrase_table::normalize;
    use std::collections::HashSet;

    #[test]
    fn seed_keys_are_unique_and_already_normalized() {
        let mut seen = HashSet::new();
        for e in entries() {
            assert_eq!(e.phrase, normalize::key(&e.phrase), "seed phrase not normalized: {}", e.phrase);
            assert!(!e.translation.trim().is_empty());
            assert_ne!(e.source, e.target);
            assert!(seen.insert((e.source, e.target, e.phrase)));
        }
    }
}
