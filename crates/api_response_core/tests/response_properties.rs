use api_response_core::{
    ApiResponse, BuildError, RequestContext, ResponseBuilder, ResponseKind, SupportedMethod,
    REQUEST_ID_HEADER,
};
use serde_json::json;

fn expected_vocabulary(method: SupportedMethod) -> Vec<ResponseKind> {
    use ResponseKind::*;
    match method {
        SupportedMethod::Get => vec![
            Success,
            SuccessFunctionalError,
            BadRequest,
            Forbidden,
            NotFound,
            InternalServerError,
        ],
        SupportedMethod::Post => ResponseKind::ALL.to_vec(),
        SupportedMethod::Put | SupportedMethod::Patch | SupportedMethod::Delete => vec![
            Success,
            SuccessNoContent,
            SuccessFunctionalError,
            BadRequest,
            Forbidden,
            NotFound,
            Conflict,
            InternalServerError,
        ],
    }
}

#[test]
fn every_method_binds_with_its_vocabulary() {
    for method in SupportedMethod::ALL {
        let builder = ResponseBuilder::new(method.as_str()).expect("method should bind");
        assert_eq!(builder.method(), method);
        assert_eq!(builder.vocabulary().to_vec(), expected_vocabulary(method));
    }
}

#[test]
fn every_vocabulary_kind_fills_exactly_one_slot_with_tabled_status() {
    let context = RequestContext::new("req-42");
    for method in SupportedMethod::ALL {
        let builder = ResponseBuilder::for_method(method);
        for &kind in builder.vocabulary() {
            let envelope = builder
                .build(kind, &context, None)
                .unwrap_or_else(|error| panic!("{method} {kind} failed: {error}"));

            let response = match (envelope.success_response(), envelope.error_payload()) {
                (Some(response), None) => {
                    assert!(!kind.is_error(), "{method} {kind} used success slot");
                    response.clone()
                }
                (None, Some(serialized)) => {
                    assert!(kind.is_error(), "{method} {kind} used error slot");
                    serde_json::from_str::<ApiResponse>(serialized).expect("error slot parses")
                }
                other => panic!("{method} {kind} populated slots {other:?}"),
            };

            let expected_status = match kind {
                ResponseKind::Success | ResponseKind::SuccessFunctionalError => 200,
                ResponseKind::SuccessCreated => 201,
                ResponseKind::SuccessNoContent => 204,
                ResponseKind::BadRequest => 400,
                ResponseKind::Forbidden => 403,
                ResponseKind::NotFound => 404,
                ResponseKind::Conflict => 409,
                ResponseKind::InternalServerError => 500,
            };
            assert_eq!(response.status_code, expected_status);
            assert_eq!(response.request_id(), Some("req-42"));
        }
    }
}

#[test]
fn error_slot_carries_body_only_when_payload_given() {
    let context = RequestContext::new("trace-1");
    let builder = ResponseBuilder::for_method(SupportedMethod::Post);

    for kind in ResponseKind::ALL.into_iter().filter(|kind| kind.is_error()) {
        let without = builder.build(kind, &context, None).expect("build");
        let parsed: serde_json::Value =
            serde_json::from_str(without.error_payload().expect("error slot")).expect("parse");
        assert_eq!(parsed["headers"][REQUEST_ID_HEADER], json!("trace-1"));
        assert!(parsed.get("body").is_none());

        let with = builder
            .build(kind, &context, Some(json!({"detail": "nope"})))
            .expect("build");
        let parsed: serde_json::Value =
            serde_json::from_str(with.error_payload().expect("error slot")).expect("parse");
        assert_eq!(parsed["statusCode"], json!(kind.status_code()));
        assert_eq!(parsed["body"], json!({"detail": "nope"}));
    }
}

#[test]
fn kinds_outside_vocabulary_are_unsupported() {
    let context = RequestContext::new("x");
    for method in SupportedMethod::ALL {
        let builder = ResponseBuilder::for_method(method);
        for kind in ResponseKind::ALL
            .into_iter()
            .filter(|kind| !builder.supports(*kind))
        {
            let error = builder
                .build(kind, &context, None)
                .expect_err("kind should be rejected");
            assert!(matches!(error, BuildError::UnsupportedResponseKind { .. }));
        }
    }
}

#[test]
fn get_success_matches_reference_example() {
    let builder = ResponseBuilder::new("GET").expect("GET should bind");
    let envelope = builder
        .build(
            ResponseKind::Success,
            &RequestContext::new("abc"),
            Some(json!({"Code": 200, "Message": "All good"})),
        )
        .expect("build");

    assert_eq!(
        serde_json::to_value(&envelope).expect("serialize"),
        json!({
            "success": {
                "statusCode": 200,
                "headers": {"XRequestID": "abc"},
                "body": {"Code": 200, "Message": "All good"}
            }
        })
    );
}

#[test]
fn completion_error_is_the_json_string() {
    let builder = ResponseBuilder::for_method(SupportedMethod::Get);
    let envelope = builder
        .build(
            ResponseKind::InternalServerError,
            &RequestContext::new("abc"),
            None,
        )
        .expect("build");

    let error = envelope.into_completion().expect_err("error slot");
    assert_eq!(error, r#"{"statusCode":500,"headers":{"XRequestID":"abc"}}"#);
}
