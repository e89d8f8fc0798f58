//! Remote translation tier.
//!
//! Every provider speaks to some hosted HTTP service and reports its own
//! failure cause; the resolver decides what to do with it.

pub mod libre;
pub mod mymemory;

pub use libre::LibreTranslate;
pub use mymemory::MyMemory;

use crate::config::{ProviderKind, RemoteConfig};
use crate::error::{ConfigError, RemoteError};

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

const ERROR_SNIPPET_LEN: usize = 400;

pub trait RemoteProvider: Send + Sync {
    /// Short name reported alongside remote results and in logs.
    fn name(&self) -> &str;

    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, RemoteError>;
}

/// Builds the provider selected by config, or `None` for offline mode.
pub fn from_config(cfg: &RemoteConfig) -> Result<Option<Box<dyn RemoteProvider>>, ConfigError> {
    let endpoint = cfg
        .endpoint
        .clone()
        .unwrap_or_else(|| cfg.provider.default_endpoint().to_string());

    let provider: Box<dyn RemoteProvider> = match cfg.provider {
        ProviderKind::None => {
            tracing::info!("no remote provider configured, phrase table only");
            return Ok(None);
        }
        ProviderKind::LibreTranslate => Box::new(LibreTranslate::new(
            build_client(cfg.timeout_secs)?,
            endpoint,
            cfg.api_key.clone(),
        )),
        ProviderKind::MyMemory => Box::new(MyMemory::new(
            build_client(cfg.timeout_secs)?,
            endpoint,
            cfg.email.clone(),
        )),
    };

    tracing::info!(provider = provider.name(), timeout_secs = cfg.timeout_secs, "remote provider ready");

    Ok(Some(provider))
}

pub fn build_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Turns a non-success response into `RemoteError::Status`, pulling a
/// message out of the common JSON error shapes when there is one.
pub(crate) fn status_error(status: StatusCode, body_text: &str) -> RemoteError {
    RemoteError::Status {
        code: status.as_u16(),
        message: extract_error_message(body_text),
    }
}

fn extract_error_message(body_text: &str) -> String {
    // { "error": "..." } | { "error": { "message": "..." } } | { "message": "..." }
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body_text) {
        if let Some(msg) = v.get("error").and_then(|e| e.as_str()) {
            return msg.to_string();
        }
        if let Some(msg) = v
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return msg.to_string();
        }
        if let Some(msg) = v.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }

    snippet(body_text)
}

pub(crate) fn snippet(body_text: &str) -> String {
    let trimmed = body_text.trim();
    if trimmed.len() <= ERROR_SNIPPET_LEN {
        return trimmed.to_string();
    }

    let mut end = ERROR_SNIPPET_LEN;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}

#[cfg(test)]
pub(crate) mod stub {
    //! One-shot HTTP server on loopback for provider tests.

    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    pub struct Captured {
        pub request_line: String,
        pub body: String,
    }

    /// Serves exactly one request with the given status line and body.
    /// Returns the base URL and a receiver yielding what the client sent.
    pub fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap_or(0);
                    }
                }
            }

            let mut body_buf = vec![0u8; content_length];
            reader.read_exact(&mut body_buf).unwrap();

            let mut stream = stream;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            let _ = tx.send(Captured {
                request_line: request_line.trim_end().to_string(),
                body: String::from_utf8_lossy(&body_buf).to_string(),
            });
        });

        (format!("http://{addr}"), rx)
    }

    /// An address nothing listens on.
    pub fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_from_flat_error_field() {
        let e = status_error(StatusCode::BAD_REQUEST, r#"{"error": "Invalid target language"}"#);
        assert_eq!(e.to_string(), "HTTP 400: Invalid target language");
    }

    #[test]
    fn error_message_from_nested_error_object() {
        let e = status_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error": {"message": "slow down"}}"#,
        );
        assert_eq!(e.to_string(), "HTTP 429: slow down");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        let e = status_error(StatusCode::BAD_GATEWAY, "  <html>bad gateway</html> ");
        assert_eq!(e.to_string(), "HTTP 502: <html>bad gateway</html>");
    }

    #[test]
    fn long_bodies_are_cut_on_a_char_boundary() {
        let body = "é".repeat(300);
        let s = snippet(&body);
        assert!(s.ends_with("..."));
        assert!(s.len() <= ERROR_SNIPPET_LEN + 3);
    }

    #[test]
    fn offline_config_builds_no_provider() {
        let cfg = RemoteConfig {
            provider: ProviderKind::None,
            ..RemoteConfig::default()
        };
        assert!(from_config(&cfg).unwrap().is_none());
    }

    #[test]
    fn provider_name_follows_config() {
        let cfg = RemoteConfig {
            provider: ProviderKind::MyMemory,
            ..RemoteConfig::default()
        };
        let provider = from_config(&cfg).unwrap().unwrap();
        assert_eq!(provider.name(), "mymemory");
    }
}
