//! Assertions for RFC 7807 error responses.
//!
//! Mirrors the backend's problem details shape without depending on backend types, so
//! the wire contract is checked from the outside.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE, RETRY_AFTER};
use actix_web::http::StatusCode;
use serde::Deserialize;

pub const ERROR_TYPE_PREFIX: &str = "https://vetoboard.app/errors/";

#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Check status, headers and body of an error response and return the parsed body.
///
/// Verified:
/// - status and `code` match
/// - `Content-Type: application/problem+json`
/// - `x-trace-id` header equals the body `trace_id`
/// - `type` is the error URL for `code`
/// - `Retry-After` is present exactly on 503
/// - `detail` contains `detail_contains` when given
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    assert_eq!(status, expected_status, "unexpected status");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(content_type, "application/problem+json");

    assert_eq!(
        headers.contains_key(RETRY_AFTER),
        status == StatusCode::SERVICE_UNAVAILABLE,
        "Retry-After must be set on 503 and only on 503"
    );

    let problem: ProblemDetailsLike =
        serde_json::from_slice(body).expect("body should be problem details JSON");

    let header_trace = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id should be ASCII");
    assert_eq!(problem.trace_id, header_trace, "body trace_id must match header");
    assert!(!problem.trace_id.is_empty());

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.type_, format!("{ERROR_TYPE_PREFIX}{expected_code}"));
    assert!(!problem.title.is_empty());

    if let Some(fragment) = detail_contains {
        assert!(
            problem.detail.contains(fragment),
            "expected detail to contain '{fragment}', got '{}'",
            problem.detail
        );
    }

    problem
}

/// [`assert_problem_details_from_parts`] for a test service response.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;
    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_status,
        expected_code,
        detail_contains,
    )
}
