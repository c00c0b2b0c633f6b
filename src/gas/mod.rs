//! Gas-check proxying.
//!
//! # Data Flow
//! ```text
//! client
//!     → handlers.rs (validate username, pick operation)
//!     → client.rs (one GET to the backend)
//!     → handlers.rs (forward body, or build failure envelope)
//!     → client
//! ```
//!
//! The backend computes everything. This module only validates, forwards,
//! and reshapes failures.

pub mod client;
pub mod error;
pub mod handlers;
pub mod types;

pub use client::BackendClient;
pub use error::{GasCheckError, GasCheckResult};
pub use types::{GasCheckResponse, HealthStatus, QuickCheckFailure, WalletInfo};
