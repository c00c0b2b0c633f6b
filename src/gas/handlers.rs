//! Gas-check route handlers.
//!
//! `GET /api/gas` returns the full report, `POST /api/gas` the quick check.
//! Both validate the username locally, make one backend call, and convert
//! every failure into a JSON envelope. Nothing propagates as a raw error.

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Json;
use serde_json::Value;
use url::form_urlencoded;

use crate::gas::error::{GasCheckError, GasCheckResult};
use crate::gas::types::{HealthStatus, QUICK_CHECK_FAILED};
use crate::http::request::request_id;
use crate::http::response::{cached_json, passthrough_json, quick_failure, report_failure};
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /api/gas?username=...`
pub async fn full_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let request_id = request_id(&headers);
    let username = query_username(query.as_deref());

    let response = if username.trim().is_empty() {
        tracing::warn!(request_id = %request_id, "Full report rejected: username missing");
        report_failure(StatusCode::BAD_REQUEST, "", &GasCheckError::Validation)
    } else {
        match state.backend.fetch_report(&username, &request_id).await {
            Ok(report) => cached_json(report, state.report_cache_secs),
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    username = %username,
                    error = %e,
                    "Error fetching from backend"
                );
                report_failure(StatusCode::INTERNAL_SERVER_ERROR, &username, &e)
            }
        }
    };

    metrics::record_request("report", response.status().as_u16());
    response
}

/// `POST /api/gas` with `{ "username": "..." }`
pub async fn quick_check(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = request_id(&headers);
    let response = quick(&state, &request_id, &body).await;
    metrics::record_request("quick", response.status().as_u16());
    response
}

async fn quick(state: &AppState, request_id: &str, body: &[u8]) -> Response {
    let username = match body_username(body) {
        Ok(Some(username)) => username,
        Ok(None) => {
            tracing::warn!(request_id = %request_id, "Quick check rejected: username missing");
            return quick_failure(
                StatusCode::BAD_REQUEST,
                &GasCheckError::Validation.to_string(),
            );
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Error in quick check");
            return quick_failure(StatusCode::INTERNAL_SERVER_ERROR, QUICK_CHECK_FAILED);
        }
    };

    match state.backend.fetch_quick(&username, request_id).await {
        Ok(body) => passthrough_json(body),
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Error in quick check");
            quick_failure(StatusCode::INTERNAL_SERVER_ERROR, QUICK_CHECK_FAILED)
        }
    }
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::default())
}

/// First `username` query parameter, empty when absent.
fn query_username(query: Option<&str>) -> String {
    query
        .and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "username")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

/// Username from a quick-check body.
///
/// Absent, null, falsy, and blank values yield `None`. A body that is not JSON,
/// a bare `null` body, or a username of another type is an error.
fn body_username(body: &[u8]) -> GasCheckResult<Option<String>> {
    let body: Value = serde_json::from_slice(body)?;
    if body.is_null() {
        return Err(GasCheckError::InvalidUsername);
    }
    match body.get("username") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(GasCheckError::InvalidUsername),
    }
}
