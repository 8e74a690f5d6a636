//! IMC API server.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                   imc-api                     │
//!                     │                                               │
//!   Client Request    │  ┌─────────┐   ┌───────────┐   ┌──────────┐  │
//!   ──────────────────┼─▶│   net   │──▶│   http    │──▶│ classifi-│  │
//!                     │  │listener │   │ server    │   │  cation  │  │
//!                     │  └─────────┘   └─────┬─────┘   └──────────┘  │
//!   Client Response   │                      │                        │
//!   ◀─────────────────┼──────────────────────┘                        │
//!                     │  ┌──────────────────────────────────────────┐ │
//!                     │  │ config · observability · lifecycle       │ │
//!                     │  └──────────────────────────────────────────┘ │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use imc_api::config::{loader::resolve_config, ObservabilityConfig};
use imc_api::lifecycle;
use imc_api::observability::logging;

#[derive(Parser)]
#[command(name = "imc-api", version)]
#[command(about = "Body mass index classification service", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults serve on 0.0.0.0:5600.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate the configuration and exit without serving.
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logging::init(&ObservabilityConfig::default());
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "imc-api starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if cli.check_config {
        tracing::info!("Configuration is valid");
        return ExitCode::SUCCESS;
    }

    match lifecycle::run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            ExitCode::FAILURE
        }
    }
}
