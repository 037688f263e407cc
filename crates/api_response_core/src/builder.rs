use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::context::RequestContext;
use crate::envelope::{ApiResponse, ResponseEnvelope};
use crate::error::{BuildError, ConfigurationError};
use crate::kind::ResponseKind;
use crate::method::SupportedMethod;

/// Business error reported over a transport-success (200) response.
///
/// Only these four fields survive into the response body; anything else on
/// the source payload is dropped. Fields absent from the source stay absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionalError {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(
        rename = "emcpRequestId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub emcp_request_id: Option<Value>,
}

impl FunctionalError {
    /// Picks the descriptor fields out of an arbitrary payload. Non-object
    /// payloads yield an empty descriptor.
    pub fn from_payload(payload: &Value) -> Self {
        let field = |name: &str| payload.get(name).cloned();
        Self {
            error_type: field("type"),
            code: field("code"),
            message: field("message"),
            emcp_request_id: field("emcpRequestId"),
        }
    }

    fn into_body(self) -> Value {
        json!({ "error": self })
    }
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Turns an outcome classification into the response handed to the
/// completion path. Bound to a single method for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseBuilder {
    method: SupportedMethod,
}

impl ResponseBuilder {
    pub fn new(method: &str) -> Result<Self, ConfigurationError> {
        Ok(Self::for_method(method.parse()?))
    }

    pub const fn for_method(method: SupportedMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> SupportedMethod {
        self.method
    }

    pub fn vocabulary(&self) -> &'static [ResponseKind] {
        self.method.vocabulary()
    }

    pub fn supports(&self, kind: ResponseKind) -> bool {
        self.method.supports(kind)
    }

    /// Builds the envelope for `kind`.
    ///
    /// Empty payloads (`null`, `false`, `0`, `""`) are treated as no
    /// payload. Error-family kinds are
    /// serialized to a JSON string before they leave the builder.
    pub fn build(
        &self,
        kind: ResponseKind,
        context: &RequestContext,
        payload: Option<Value>,
    ) -> Result<ResponseEnvelope, BuildError> {
        if !self.supports(kind) {
            return Err(BuildError::UnsupportedResponseKind {
                kind,
                method: self.method,
            });
        }

        let payload = payload.filter(|value| !is_empty_payload(value));
        let body = match kind {
            ResponseKind::SuccessFunctionalError => {
                payload.map(|value| FunctionalError::from_payload(&value).into_body())
            }
            _ => payload,
        };

        let response = ApiResponse::new(kind.status_code(), context, body);
        if kind.is_error() {
            Ok(ResponseEnvelope::error(serde_json::to_string(&response)?))
        } else {
            Ok(ResponseEnvelope::success(response))
        }
    }

    /// Same as [`build`](Self::build) with the kind given by name.
    pub fn build_named(
        &self,
        kind: &str,
        context: &RequestContext,
        payload: Option<Value>,
    ) -> Result<ResponseEnvelope, BuildError> {
        self.build(kind.parse()?, context, payload)
    }

    pub fn build_serialized<T: Serialize>(
        &self,
        kind: ResponseKind,
        context: &RequestContext,
        payload: &T,
    ) -> Result<ResponseEnvelope, BuildError> {
        let payload = serde_json::to_value(payload)?;
        self.build(kind, context, Some(payload))
    }
}
