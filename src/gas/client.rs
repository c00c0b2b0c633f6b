//! HTTP client for the external gas backend.
//!
//! # Responsibilities
//! - Build backend URLs from the injected base URL
//! - Issue exactly one GET per inbound request (no retries)
//! - Propagate the request ID to the backend
//! - Record backend latency per endpoint and outcome
//!
//! No timeout is configured here; the transport defaults apply.

use std::time::Instant;

use axum::body::Bytes;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde::de::IgnoredAny;
use url::Url;

use crate::config::BackendConfig;
use crate::gas::error::{GasCheckError, GasCheckResult};
use crate::http::request::X_REQUEST_ID;
use crate::observability::metrics;

/// Backend path serving the full report.
pub const REPORT_PATH: &str = "/api/gas";

/// Backend path serving the quick check.
pub const QUICK_PATH: &str = "/api/quick";

const USER_AGENT: &str = concat!("gas-check-proxy/", env!("CARGO_PKG_VERSION"));

/// Client for the gas backend's two endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client from configuration. The connection pool is shared by all requests.
    pub fn new(config: &BackendConfig) -> GasCheckResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `<base><path>?username=<trimmed, encoded>`.
    pub fn endpoint_url(&self, path: &str, username: &str) -> GasCheckResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        url.query_pairs_mut().append_pair("username", username.trim());
        Ok(url)
    }

    /// Fetch the full report. Non-2xx statuses are errors. The body is
    /// returned byte for byte.
    pub async fn fetch_report(&self, username: &str, request_id: &str) -> GasCheckResult<Bytes> {
        let start = Instant::now();
        let result = self.report(username, request_id).await;
        metrics::record_backend_call("report", outcome(&result), start);
        result
    }

    /// Fetch the quick check. The status code is not inspected; the body is
    /// forwarded whatever it reports.
    pub async fn fetch_quick(&self, username: &str, request_id: &str) -> GasCheckResult<Bytes> {
        let start = Instant::now();
        let result = self.quick(username, request_id).await;
        metrics::record_backend_call("quick", outcome(&result), start);
        result
    }

    async fn report(&self, username: &str, request_id: &str) -> GasCheckResult<Bytes> {
        let response = self.get(REPORT_PATH, username, request_id).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GasCheckError::Backend(status.as_u16()));
        }
        read_json(response).await
    }

    async fn quick(&self, username: &str, request_id: &str) -> GasCheckResult<Bytes> {
        let response = self.get(QUICK_PATH, username, request_id).await?;
        read_json(response).await
    }

    async fn get(&self, path: &str, username: &str, request_id: &str) -> GasCheckResult<Response> {
        let url = self.endpoint_url(path, username)?;
        tracing::debug!(request_id = %request_id, url = %url, "Calling gas backend");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(X_REQUEST_ID, request_id)
            .send()
            .await?;
        Ok(response)
    }
}

/// Body bytes, untouched, once they are known to be one JSON document.
async fn read_json(response: Response) -> GasCheckResult<Bytes> {
    let body = response.bytes().await?;
    serde_json::from_slice::<IgnoredAny>(&body)?;
    Ok(body)
}

fn outcome(result: &GasCheckResult<Bytes>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    }
}
