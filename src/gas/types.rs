//! Gas-check payloads.
//!
//! The shapes are owned by the backend; the proxy only builds them locally
//! for failure envelopes and for CLI display.

use serde::{Deserialize, Serialize};

/// Fallback message when a failure carries no message of its own.
pub const BACKEND_UNAVAILABLE: &str = "Failed to connect to backend";

/// Message returned by the quick check for any non-validation failure.
pub const QUICK_CHECK_FAILED: &str = "Failed to process request";

/// One wallet linked to a username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    pub eth_tx_count: u64,
    pub base_tx_count: u64,
    pub eth_balance: f64,
    /// At most one wallet per set is primary. The backend guarantees this.
    pub is_primary: bool,
}

/// Full gas report for a username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasCheckResponse {
    pub success: bool,
    pub username: String,
    pub fid: Option<u64>,
    pub display_name: Option<String>,
    pub pfp_url: Option<String>,
    /// Backend order, never re-sorted.
    #[serde(default)]
    pub wallets: Vec<WalletInfo>,
    pub primary_wallet: Option<String>,
    #[serde(default)]
    pub total_gas_used_eth: f64,
    #[serde(default)]
    pub total_gas_used_base: f64,
    #[serde(default)]
    pub total_gas_usd: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GasCheckResponse {
    /// Full-schema error envelope: identity fields null, totals zero, no wallets.
    pub fn failure(username: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            username: username.into(),
            fid: None,
            display_name: None,
            pfp_url: None,
            wallets: Vec::new(),
            primary_wallet: None,
            total_gas_used_eth: 0.0,
            total_gas_used_base: 0.0,
            total_gas_usd: 0.0,
            error: Some(error.into()),
        }
    }

    /// The wallet flagged primary, if the backend marked one.
    pub fn primary(&self) -> Option<&WalletInfo> {
        self.wallets.iter().find(|w| w.is_primary)
    }
}

/// Two-field error envelope used by the quick check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickCheckFailure {
    pub success: bool,
    pub error: String,
}

impl QuickCheckFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Liveness payload for `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
