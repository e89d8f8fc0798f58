use regex::Regex;
use std::sync::OnceLock;

/// Source code that asks the remote provider to detect the language.
pub const AUTO: &str = "auto";

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Ex.: "en", "rw", "pt-BR", "zh-Hant-TW"
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("static regex"))
}

pub fn is_valid_code(code: &str) -> bool {
    code_re().is_match(code)
}

pub fn is_valid_source(code: &str) -> bool {
    code == AUTO || is_valid_code(code)
}
