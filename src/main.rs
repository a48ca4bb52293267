//! Employee REST facade.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌───────────────────────────────────────────────┐
//!                     │                 EMPLOYEE FACADE               │
//!                     │                                               │
//!   Client Request    │  ┌─────────┐    ┌──────────┐    ┌──────────┐  │
//!   ──────────────────┼─▶│  http   │───▶│  proxy   │───▶│ upstream │──┼──▶ Employee
//!                     │  │ handler │    │ service  │    │  client  │  │    Service
//!                     │  └─────────┘    └────┬─────┘    └──────────┘  │
//!                     │                      │                        │
//!   Client Response   │               ┌──────▼──────┐                 │
//!   ◀─────────────────┼───────────────│ employee::  │                 │
//!                     │               │ ops + Reply │                 │
//!                     │               └─────────────┘                 │
//!                     │                                               │
//!                     │   config · observability · lifecycle          │
//!                     └───────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use employee_facade::config::{load_or_default, validation::validate_config, ConfigError};
use employee_facade::lifecycle::{signals, Shutdown};
use employee_facade::observability::{logging, metrics};
use employee_facade::HttpServer;

#[derive(Parser)]
#[command(name = "employee-facade")]
#[command(about = "REST facade over the upstream employee service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability);
    tracing::info!("employee-facade v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.collection_url(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    let signal_task = tokio::spawn(async move {
        signals::forward_to(&shutdown).await;
    });

    server.run(listener, server_shutdown).await?;
    signal_task.abort();

    tracing::info!("Shutdown complete");
    Ok(())
}
