//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize the metrics exporter when enabled
//! - Bind the listener
//! - Serve the application until a shutdown signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Steps run in order, not concurrently
//! - The listener is bound last, after everything it depends on is ready

use std::net::SocketAddr;

use metrics_exporter_prometheus::BuildError;

use crate::config::{ConfigError, ServiceConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::net::{self, ListenerError};
use crate::observability::metrics;

/// Fatal errors preventing the service from serving traffic.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("listener error: {0}")]
    Listener(#[from] ListenerError),
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] BuildError),
    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the service until SIGINT/SIGTERM.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    let shutdown = Shutdown::new();
    signals::forward_to(shutdown.clone());
    run_until(config, &shutdown).await
}

/// Run the service until `shutdown` is triggered.
pub async fn run_until(config: ServiceConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = net::bind(&config.listener).await?;
    let server = HttpServer::new(config);

    tracing::info!(
        request_timeout_secs = server.config().timeouts.request_secs,
        max_connections = server.config().listener.max_connections,
        "Serving application"
    );

    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
