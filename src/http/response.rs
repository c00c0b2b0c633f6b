//! Response shaping.
//!
//! Successful backend bodies pass through byte for byte. Only failures are
//! reshaped, into one of two envelopes:
//! - full report: the complete `GasCheckResponse` schema with defaults
//! - quick check: `{ success, error }` only

use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::gas::error::GasCheckError;
use crate::gas::types::{GasCheckResponse, QuickCheckFailure};

/// Forward a backend body, letting intermediary caches reuse it for `max_age_secs`.
pub fn cached_json(body: Bytes, max_age_secs: u64) -> Response {
    let cache_control = format!("public, s-maxage={}", max_age_secs);
    let mut response = passthrough_json(body);
    if let Ok(value) = HeaderValue::from_str(&cache_control) {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }
    response
}

/// Forward a backend body as-is.
pub fn passthrough_json(body: Bytes) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}

/// Full-schema failure envelope.
pub fn report_failure(status: StatusCode, username: &str, error: &GasCheckError) -> Response {
    (
        status,
        Json(GasCheckResponse::failure(username, error.client_message())),
    )
        .into_response()
}

/// Two-field failure envelope.
pub fn quick_failure(status: StatusCode, message: &str) -> Response {
    (status, Json(QuickCheckFailure::new(message))).into_response()
}
