use super::{snippet, status_error, RemoteProvider};
use crate::error::RemoteError;
use crate::model::language::AUTO;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

/// MyMemory-style endpoint: `GET ?q=..&langpair=src|tgt`, answers with
/// `{responseStatus, responseData: {translatedText}}`.
pub struct MyMemory {
    client: Client,
    endpoint: String,
    email: Option<String>,
}

impl MyMemory {
    pub fn new(client: Client, endpoint: String, email: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            email: email.filter(|e| !e.trim().is_empty()),
        }
    }
}

fn langpair(source: &str, target: &str) -> String {
    // MyMemory spells source detection "autodetect".
    let source = if source == AUTO { "autodetect" } else { source };
    format!("{source}|{target}")
}

impl RemoteProvider for MyMemory {
    fn name(&self) -> &str {
        "mymemory"
    }

    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, RemoteError> {
        let pair = langpair(source, target);
        let mut query: Vec<(&str, &str)> = vec![("q", text), ("langpair", pair.as_str())];
        if let Some(email) = self.email.as_deref() {
            query.push(("de", email));
        }

        let resp = self.client.get(&self.endpoint).query(&query).send()?;
        let status = resp.status();
        let body_text = resp.text()?;

        parse_response(status, &body_text)
    }
}

fn parse_response(status: StatusCode, body_text: &str) -> Result<String, RemoteError> {
    if !status.is_success() {
        return Err(status_error(status, body_text));
    }

    let v: Value =
        serde_json::from_str(body_text).map_err(|e| RemoteError::Malformed(e.to_string()))?;

    // The service sends the status both as a number and as a string.
    let response_status = match v.get("responseStatus") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match response_status {
        Some(200) => {}
        Some(code) => {
            let message = v
                .get("responseDetails")
                .and_then(|d| d.as_str())
                .map(snippet)
                .unwrap_or_default();
            return Err(RemoteError::Status {
                code: u16::try_from(code).unwrap_or(u16::MAX),
                message,
            });
        }
        None => {
            return Err(RemoteError::Malformed(
                "missing or non-numeric responseStatus".into(),
            ))
        }
    }

    match v
        .get("responseData")
        .and_then(|d| d.get("translatedText"))
        .and_then(|t| t.as_str())
    {
        Some(t) if !t.is_empty() => Ok(t.to_string()),
        _ => Err(RemoteError::MissingTranslation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::remote::{build_client, stub};

    #[test]
    fn reads_nested_translated_text() {
        let body = r#"{"responseStatus": 200, "responseData": {"translatedText": "Muraho"}}"#;
        assert_eq!(parse_response(StatusCode::OK, body).unwrap(), "Muraho");
    }

    #[test]
    fn accepts_string_status() {
        let body = r#"{"responseStatus": "200", "responseData": {"translatedText": "Muraho"}}"#;
        assert_eq!(parse_response(StatusCode::OK, body).unwrap(), "Muraho");
    }

    #[test]
    fn provider_level_failure_inside_http_200() {
        let body = r#"{"responseStatus": "403", "responseDetails": "INVALID LANGUAGE PAIR SPECIFIED", "responseData": {"translatedText": "INVALID LANGUAGE PAIR SPECIFIED"}}"#;
        match parse_response(StatusCode::OK, body).unwrap_err() {
            RemoteError::Status { code, message } => {
                assert_eq!(code, 403);
                assert_eq!(message, "INVALID LANGUAGE PAIR SPECIFIED");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_status_is_malformed() {
        let body = r#"{"responseData": {"translatedText": "x"}}"#;
        assert!(matches!(
            parse_response(StatusCode::OK, body),
            Err(RemoteError::Malformed(_))
        ));
    }

    #[test]
    fn whitespace_only_translation_is_returned_verbatim() {
        let body = r#"{"responseStatus": 200, "responseData": {"translatedText": " "}}"#;
        assert_eq!(parse_response(StatusCode::OK, body).unwrap(), " ");
    }

    #[test]
    fn missing_translation_is_reported() {
        let body = r#"{"responseStatus": 200, "responseData": {}}"#;
        assert!(matches!(
            parse_response(StatusCode::OK, body),
            Err(RemoteError::MissingTranslation)
        ));
    }

    #[test]
    fn auto_source_maps_to_autodetect() {
        assert_eq!(langpair("auto", "rw"), "autodetect|rw");
        assert_eq!(langpair("en", "rw"), "en|rw");
    }

    #[test]
    fn sends_query_parameters() {
        let (base, rx) = stub::serve_once(
            "200 OK",
            r#"{"responseStatus": 200, "responseData": {"translatedText": "murakoze"}}"#,
        );
        let provider = MyMemory::new(
            build_client(5).unwrap(),
            format!("{base}/get"),
            Some("me@example.com".into()),
        );

        let out = provider.translate("thank you", "en", "rw").unwrap();
        assert_eq!(out, "murakoze");

        let line = rx.recv().unwrap().request_line;
        assert!(line.starts_with("GET /get?"), "{line}");
        assert!(line.contains("q=thank+you"), "{line}");
        assert!(line.contains("langpair=en%7Crw"), "{line}");
        assert!(line.contains("de=me%40example.com"), "{line}");
    }

    #[test]
    fn http_error_status_is_reported() {
        let (base, _rx) = stub::serve_once("500 Internal Server Error", r#"{"message": "boom"}"#);
        let provider = MyMemory::new(build_client(5).unwrap(), base, None);

        match provider.translate("hello", "en", "rw").unwrap_err() {
            RemoteError::Status { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
