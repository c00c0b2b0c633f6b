//! Error taxonomy for the gas-check handlers.

use thiserror::Error;

use crate::gas::types::BACKEND_UNAVAILABLE;

/// Errors raised while serving a gas check.
#[derive(Debug, Error)]
pub enum GasCheckError {
    /// Missing or blank username, detected locally.
    #[error("Username is required")]
    Validation,

    /// Quick-check body carried a username that is not a string.
    #[error("Username must be a string")]
    InvalidUsername,

    /// Non-2xx status from the backend (full report only).
    #[error("Backend responded with status {0}")]
    Backend(u16),

    /// Transport failure talking to the backend. The URL is stripped so the
    /// backend address never reaches clients.
    #[error("{0}")]
    Network(reqwest::Error),

    /// Body that should have been JSON was not.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Backend URL could not be built.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for GasCheckError {
    fn from(e: reqwest::Error) -> Self {
        GasCheckError::Network(e.without_url())
    }
}

impl GasCheckError {
    /// Message for the client envelope, falling back when the error has none.
    pub fn client_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            BACKEND_UNAVAILABLE.to_string()
        } else {
            message
        }
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            GasCheckError::Validation | GasCheckError::InvalidUsername => "validation",
            GasCheckError::Backend(_) => "backend",
            GasCheckError::Network(_) => "network",
            GasCheckError::Parse(_) => "parse",
            GasCheckError::InvalidUrl(_) => "config",
        }
    }
}

/// Result type for gas-check operations.
pub type GasCheckResult<T> = Result<T, GasCheckError>;
