//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers and backend client produce:
//!     → logging.rs (structured log events, request ID on every line)
//!     → metrics.rs (request counters, backend latency histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;
