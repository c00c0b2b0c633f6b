//! Gas-check proxy.
//!
//! ```text
//!     Client ──GET /api/gas?username=──▶ ┌──────────────┐ ──GET /api/gas───▶ ┌─────────┐
//!            ──POST /api/gas──────────▶ │  gas-check   │ ──GET /api/quick─▶ │ backend │
//!            ◀──JSON / error envelope── │    proxy     │ ◀──JSON─────────── └─────────┘
//!                                        └──────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use gas_check_proxy::config::load_config;
use gas_check_proxy::lifecycle::{wait_for_signal, Shutdown};
use gas_check_proxy::observability::{logging, metrics};
use gas_check_proxy::HttpServer;

#[derive(Parser)]
#[command(name = "gas-check-proxy", version)]
#[command(about = "Proxy gas-check lookups to the gas backend", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, env = "GAS_PROXY_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address, overriding the configuration.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability)?;
    tracing::info!("gas-check-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %config.backend.base_url,
        cors_origins = ?config.cors.allowed_origins,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
