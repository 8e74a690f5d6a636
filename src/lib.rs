//! IMC API: body mass index classification over HTTP.
//!
//! The service binds `0.0.0.0:5600` and serves the router built by [`app`].

// Core subsystems
pub mod classification;
pub mod config;
pub mod http;
pub mod net;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use http::{app, HttpServer};
pub use lifecycle::Shutdown;
