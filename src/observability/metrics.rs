//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gas_proxy_requests_total` (counter): inbound requests by operation, status
//! - `gas_proxy_backend_duration_seconds` (histogram): backend latency by endpoint, outcome
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one inbound request.
pub fn record_request(operation: &'static str, status: u16) {
    ::metrics::counter!(
        "gas_proxy_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record how long one backend call took.
pub fn record_backend_call(endpoint: &'static str, outcome: &'static str, start: Instant) {
    ::metrics::histogram!(
        "gas_proxy_backend_duration_seconds",
        "endpoint" => endpoint,
        "outcome" => outcome
    )
    .record(start.elapsed().as_secs_f64());
}
