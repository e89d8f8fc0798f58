//! JSON-lines front-end: one request object per input line, one response
//! object per output line.

use serde_json::{json, Value};

use crate::model::request::TranslationRequest;
use crate::services::resolver::Resolver;

mod command;
pub use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

pub fn err(id: Value, code: &str, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "code": code,
        "message": message.into()
    })
    .to_string()
}

fn parse_request(payload: &Value) -> Result<TranslationRequest, String> {
    if !payload.is_object() {
        return Err("payload must be an object".into());
    }
    serde_json::from_value::<TranslationRequest>(payload.clone())
        .map_err(|e| format!("invalid payload: {e}"))
}

pub fn handle(resolver: &Resolver, input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "unparseable request line");
            return err(Value::Null, "invalid_json", "invalid json");
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    match Command::from(cmd_str) {
        Command::Ping => ok(id, json!({ "message": "lingo-core alive" })),

        Command::Translate => {
            let request = match parse_request(payload) {
                Ok(r) => r,
                Err(e) => return err(id, "invalid_input", e),
            };

            match resolver.resolve(&request) {
                Ok(result) => ok(id, json!(result)),
                Err(e) => {
                    tracing::info!(code = e.code(), error = %e, "translate request failed");
                    err(id, e.code(), e.to_string())
                }
            }
        }

        Command::Languages => ok(
            id,
            json!({
                "provider": resolver.provider_name(),
                "pairs": resolver.phrases().pairs(),
            }),
        ),

        Command::Unknown => err(id, "unknown_command", format!("unknown command: {cmd_str:?}")),
    }
}
