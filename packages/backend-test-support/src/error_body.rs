//! Assertions for the API's stable error contract.
//!
//! Every error response carries the JSON body `{"error": string}`. These
//! helpers validate status and body without depending on backend types.

use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local struct matching the backend's error body shape.
#[derive(Debug, Deserialize)]
struct ErrorBodyLike {
    error: String,
}

/// Assert that a response's status and body conform to the error contract.
pub fn assert_error_body(
    status: StatusCode,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(status, expected_status, "unexpected HTTP status");

    let body_str =
        String::from_utf8(body_bytes.to_vec()).expect("response body should be valid UTF-8");
    let parsed: ErrorBodyLike = serde_json::from_str(&body_str)
        .unwrap_or_else(|e| panic!("body is not an error object ({e}): {body_str}"));

    assert_eq!(parsed.error, expected_message, "unexpected error message");
}
