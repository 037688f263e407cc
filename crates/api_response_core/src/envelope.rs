use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::context::RequestContext;

/// Header carrying the invocation id on every response.
pub const REQUEST_ID_HEADER: &str = "XRequestID";

/// HTTP-shaped response record understood by API Gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiResponse {
    pub(crate) fn new(status_code: u16, context: &RequestContext, body: Option<Value>) -> Self {
        Self {
            status_code,
            headers: BTreeMap::from([(
                REQUEST_ID_HEADER.to_string(),
                context.request_id.clone(),
            )]),
            body,
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.headers.get(REQUEST_ID_HEADER).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Success(ApiResponse),
    Error(String),
}

/// Result of one build call: either a structured success response or a
/// pre-serialized error response, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    slot: Slot,
}

impl ResponseEnvelope {
    pub(crate) fn success(response: ApiResponse) -> Self {
        Self {
            slot: Slot::Success(response),
        }
    }

    pub(crate) fn error(serialized: String) -> Self {
        Self {
            slot: Slot::Error(serialized),
        }
    }

    pub fn success_response(&self) -> Option<&ApiResponse> {
        match &self.slot {
            Slot::Success(response) => Some(response),
            Slot::Error(_) => None,
        }
    }

    /// JSON string of the error response, when the error slot is populated.
    pub fn error_payload(&self) -> Option<&str> {
        match &self.slot {
            Slot::Success(_) => None,
            Slot::Error(serialized) => Some(serialized),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.slot, Slot::Error(_))
    }

    /// Maps the envelope onto the completion convention: the error slot
    /// becomes `Err` carrying the JSON string, the success slot `Ok`.
    pub fn into_completion(self) -> Result<ApiResponse, String> {
        match self.slot {
            Slot::Success(response) => Ok(response),
            Slot::Error(serialized) => Err(serialized),
        }
    }
}

#[derive(Serialize)]
struct EnvelopeSlots<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<&'a ApiResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for ResponseEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EnvelopeSlots {
            success: self.success_response(),
            error: self.error_payload(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn body_is_omitted_when_absent() {
        let response = ApiResponse::new(204, &RequestContext::new("req-1"), None);
        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(
            value,
            json!({"statusCode": 204, "headers": {"XRequestID": "req-1"}})
        );
        assert_eq!(response.request_id(), Some("req-1"));
    }

    #[test]
    fn completion_routes_error_slot_to_err() {
        let envelope = ResponseEnvelope::error("{\"statusCode\":500}".to_string());
        assert!(envelope.is_error());
        assert!(envelope.success_response().is_none());
        assert_eq!(
            envelope.into_completion(),
            Err("{\"statusCode\":500}".to_string())
        );
    }

    #[test]
    fn envelope_serializes_only_the_populated_slot() {
        let response = ApiResponse::new(200, &RequestContext::new("abc"), Some(json!({"ok": true})));
        let envelope = ResponseEnvelope::success(response);
        let value = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(
            value,
            json!({
                "success": {
                    "statusCode": 200,
                    "headers": {"XRequestID": "abc"},
                    "body": {"ok": true}
                }
            })
        );
    }
}
