//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig.bind_address
//!     → listener.rs (parse, bind, classify bind failures)
//!     → tokio TcpListener handed to the HTTP server
//! ```
//!
//! # Design Decisions
//! - Exactly one listening socket per process
//! - Bind failures are fatal and typed so startup can report them

pub mod listener;

pub use listener::{bind, ListenerError};
