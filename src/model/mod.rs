pub mod language;
pub mod request;
