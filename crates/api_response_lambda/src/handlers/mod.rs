pub mod get_districts;

use api_response_core::{BuildError, RequestContext, ResponseBuilder, ResponseEnvelope, ResponseKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::normalize_event;

/// `{Code, Message}` acknowledgement returned by the handlers on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    #[serde(rename = "Code")]
    pub code: u16,
    #[serde(rename = "Message")]
    pub message: String,
}

impl StatusMessage {
    pub fn all_good() -> Self {
        Self {
            code: 200,
            message: "All good".to_string(),
        }
    }
}

/// Records the inbound event. Handlers read no request fields, so an event
/// that is not a JSON document is logged and otherwise served as usual.
fn log_request(component: &'static str, event: &Value, context: &RequestContext) {
    match normalize_event(event) {
        Ok(request) => tracing::debug!(
            component,
            event = "request_received",
            request_id = %context.request_id,
            request = %request,
            "received request"
        ),
        Err(error) => tracing::debug!(
            component,
            event = "request_not_json",
            request_id = %context.request_id,
            error = %error,
            request_event = %event,
            "received request without a JSON document"
        ),
    }
}

/// Any failure while building the primary response is answered with a
/// fresh `INTERNAL_SERVER_ERROR` build.
fn resolve_outcome(
    api: &ResponseBuilder,
    component: &'static str,
    event: &Value,
    context: &RequestContext,
    outcome: Result<ResponseEnvelope, BuildError>,
) -> Result<ResponseEnvelope, BuildError> {
    outcome.or_else(|error| {
        tracing::error!(
            component,
            event = "response_build_failed",
            request_id = %context.request_id,
            unsupported_kind = error.is_unsupported_kind(),
            error = %error,
            request_event = %event,
            "falling back to internal server error"
        );
        api.build(ResponseKind::InternalServerError, context, None)
    })
}
