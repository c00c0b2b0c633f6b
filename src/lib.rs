//! Gas-check proxy library.
//!
//! Forwards gas-usage lookups for a username to an external backend and
//! relays the JSON answer, reshaping only failures.

pub mod config;
pub mod gas;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
