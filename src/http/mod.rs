//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (net::listener)
//!     → server.rs (Axum router, middleware stack)
//!     → request.rs (request ID assigned/propagated, request span)
//!     → imc.rs (handlers: index, classification, health)
//!     → response.rs (typed errors rendered as JSON `detail` bodies)
//!     → Send to client
//! ```

pub mod imc;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{ApiError, FieldError};
pub use server::{app, HttpServer};
