use api_response_core::{ApiResponse, RequestContext, ResponseEnvelope};
use lambda_runtime::{Context, Error};

pub fn request_context(context: &Context) -> RequestContext {
    RequestContext::new(context.request_id.clone())
}

/// Hands an envelope to the Lambda runtime. The serialized error slot becomes
/// the invocation error message verbatim.
pub fn complete(envelope: ResponseEnvelope) -> Result<ApiResponse, Error> {
    envelope.into_completion().map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use api_response_core::{ResponseBuilder, ResponseKind, SupportedMethod};

    use super::*;

    #[test]
    fn error_envelope_surfaces_as_runtime_error() {
        let envelope = ResponseBuilder::for_method(SupportedMethod::Get)
            .build(
                ResponseKind::NotFound,
                &RequestContext::new("req-7"),
                None,
            )
            .expect("build should succeed");

        let error = complete(envelope).expect_err("error slot should fail the invocation");
        assert_eq!(
            error.to_string(),
            r#"{"statusCode":404,"headers":{"XRequestID":"req-7"}}"#
        );
    }

    #[test]
    fn success_envelope_passes_through() {
        let envelope = ResponseBuilder::for_method(SupportedMethod::Get)
            .build(ResponseKind::Success, &RequestContext::new("req-8"), None)
            .expect("build should succeed");

        let response = complete(envelope).expect("success slot");
        assert_eq!(response.status_code, 200);
    }
}
