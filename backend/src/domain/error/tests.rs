//! Regression coverage for the error envelope.

use rstest::rstest;
use serde_json::{Value, json};

use super::*;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("who"), ErrorCode::Unauthorized)]
#[case(Error::forbidden("no"), ErrorCode::Forbidden)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
    assert_eq!(err.code(), expected);
}

#[test]
fn serialises_to_camel_case_with_snake_case_code() {
    let err = Error::invalid_request("title too long")
        .with_trace_id("00000000-0000-0000-0000-000000000000")
        .with_details(json!({ "field": "title", "code": "title_too_long" }));

    let value = serde_json::to_value(&err).unwrap_or(Value::Null);
    assert_eq!(value.get("code").and_then(Value::as_str), Some("invalid_request"));
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("title too long")
    );
    assert_eq!(
        value.get("traceId").and_then(Value::as_str),
        Some("00000000-0000-0000-0000-000000000000")
    );
    assert_eq!(
        value
            .pointer("/details/field")
            .and_then(Value::as_str),
        Some("title")
    );
}

#[test]
fn trace_id_and_details_are_omitted_when_absent() {
    let value = serde_json::to_value(Error::not_found("gone")).unwrap_or(Value::Null);
    assert!(value.get("traceId").is_none());
    assert!(value.get("details").is_none());
}

#[test]
fn display_shows_the_message() {
    assert_eq!(Error::forbidden("not yours").to_string(), "not yours");
}

#[tokio::test]
async fn captures_scoped_trace_id() {
    let trace_id: TraceId = match "11111111-1111-1111-1111-111111111111".parse() {
        Ok(id) => id,
        Err(err) => panic!("fixture trace id must parse: {err}"),
    };
    let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(err.trace_id(), Some("11111111-1111-1111-1111-111111111111"));
}
