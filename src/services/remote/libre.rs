use super::{status_error, RemoteProvider};
use crate::error::RemoteError;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// LibreTranslate-compatible endpoint: `POST` JSON, `translatedText` back.
pub struct LibreTranslate {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct LibreResponse {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
}

impl LibreTranslate {
    pub fn new(client: Client, endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }
}

impl RemoteProvider for LibreTranslate {
    fn name(&self) -> &str {
        "libretranslate"
    }

    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, RemoteError> {
        let body = LibreRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let resp = self.client.post(&self.endpoint).json(&body).send()?;
        let status = resp.status();
        // Read as text first so a bad body still shows up in the error.
        let body_text = resp.text()?;

        parse_response(status, &body_text)
    }
}

fn parse_response(status: StatusCode, body_text: &str) -> Result<String, RemoteError> {
    if !status.is_success() {
        return Err(status_error(status, body_text));
    }

    let parsed: LibreResponse =
        serde_json::from_str(body_text).map_err(|e| RemoteError::Malformed(e.to_string()))?;

    match parsed.translated_text {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(RemoteError::MissingTranslation),
    }
}
