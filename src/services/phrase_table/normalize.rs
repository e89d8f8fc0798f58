/// Lookup key for the phrase table: trimmed, lowercased, nothing else.
pub fn key(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::key;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(key("  Good Morning "), "good morning");
        assert_eq!(key("HELLO"), "hello");
    }

    #[test]
    fn keeps_inner_spacing_and_punctuation() {
        assert_eq!(key("thank  you!"), "thank  you!");
    }
}
