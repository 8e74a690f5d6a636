//! TCP listener setup.
//!
//! # Responsibilities
//! - Parse the configured bind address
//! - Bind the single listening socket
//! - Distinguish "port already in use" from other bind failures

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// The bind address is not a socket address.
    #[error("Invalid bind address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// Another socket already owns the address.
    #[error("Address {0} is already in use")]
    AddrInUse(SocketAddr),
    /// Any other bind failure (permissions, unavailable interface, ...).
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// Bind the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let addr: SocketAddr =
        config
            .bind_address
            .parse()
            .map_err(|source| ListenerError::InvalidAddress {
                address: config.bind_address.clone(),
                source,
            })?;

    let listener = TcpListener::bind(addr).await.map_err(|source| {
        if source.kind() == io::ErrorKind::AddrInUse {
            ListenerError::AddrInUse(addr)
        } else {
            ListenerError::Bind { addr, source }
        }
    })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ListenerError::Bind { addr, source })?;

    tracing::info!(
        address = %local_addr,
        max_connections = config.max_connections,
        "Listener bound"
    );

    Ok(listener)
}
