#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    Translate,
    Languages,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "translate" => Command::Translate,
            "languages" => Command::Languages,
            _ => Command::Unknown,
        }
    }
}
