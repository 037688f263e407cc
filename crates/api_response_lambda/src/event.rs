use serde_json::{json, Value};
use thiserror::Error;

/// Reasons an inbound event cannot be handled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Request payload must be a JSON object")]
    NotAnObject,

    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    #[error("Request body must be a JSON object")]
    BodyNotAnObject,
}

/// Extracts the request document from a direct invocation or an API Gateway
/// proxy event. A proxy `body` may arrive as a JSON string, an object, or
/// `null` (no body, as on most GET requests).
pub fn normalize_event(event: &Value) -> Result<Value, EventError> {
    let Some(object) = event.as_object() else {
        return Err(EventError::NotAnObject);
    };

    let Some(body) = object.get("body") else {
        return Ok(event.clone());
    };

    match body {
        Value::Null => Ok(json!({})),
        Value::Object(_) => Ok(body.clone()),
        Value::String(text) => {
            let parsed: Value = serde_json::from_str(text)
                .map_err(|error| EventError::MalformedBody(error.to_string()))?;
            if parsed.is_object() {
                Ok(parsed)
            } else {
                Err(EventError::BodyNotAnObject)
            }
        }
        _ => Err(EventError::BodyNotAnObject),
    }
}
