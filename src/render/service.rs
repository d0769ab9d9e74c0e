use serde_json::{json, Map, Value};

use crate::inference::config::SIGNATURE_FIELD;

use super::models::rendered_response::RenderedResponse;

pub static NO_SIGNATURE: &str = "N/A";

/// Renders the full response with `status` first, followed by every field of
/// `data`. A `status` field inside `data` is overridden by the argument.
pub fn render(status: u16, data: &Map<String, Value>) -> RenderedResponse {
    let mut merged = Map::with_capacity(data.len() + 1);
    merged.insert("status".to_string(), json!(status));
    for (key, value) in data {
        if key == "status" {
            continue;
        }
        merged.insert(key.to_string(), value.clone());
    }

    let signature_text = match data.get(SIGNATURE_FIELD) {
        Some(Value::Object(signature)) if !signature.is_empty() => {
            pretty(&Value::Object(signature.clone()))
        }
        _ => NO_SIGNATURE.to_string(),
    };

    RenderedResponse {
        response_text: pretty(&Value::Object(merged)),
        signature_text,
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
