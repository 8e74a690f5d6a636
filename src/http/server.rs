//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the application router (`app`) with all handlers
//! - Wire up middleware (tracing, request ID, timeout, limits, headers)
//! - Serve the router on a bound listener until shutdown

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::{limit::GlobalConcurrencyLimitLayer, ServiceBuilder};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::imc;
use crate::http::request::make_request_span;
use crate::lifecycle::shutdown::wait as wait_for_shutdown;
use crate::observability::metrics;

/// The application entry point: every route and middleware of the service.
pub fn app(config: &ServiceConfig) -> Router {
    let routes = Router::new()
        .route("/", get(imc::index))
        .route("/imc", get(imc::classify_imc))
        .route("/health", get(imc::health))
        .fallback(imc::not_found)
        .method_not_allowed_fallback(imc::method_not_allowed);
    with_middleware(routes, config)
}

/// Wrap `routes` in the service's middleware stack.
///
/// axum applies each layer to every route and the fallback separately, so
/// the in-flight cap uses a global limit whose semaphore all of them share.
#[allow(deprecated)]
pub fn with_middleware(routes: Router, config: &ServiceConfig) -> Router {
    let router = routes
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(GlobalConcurrencyLimitLayer::new(
                    config.listener.max_connections,
                )),
        );

    if config.security.enable_headers {
        router
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            ))
    } else {
        router
    }
}

/// HTTP server for the IMC service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = app(&config);
        Self { router, config }
    }

    /// Run the server on `listener` until `shutdown` fires, then drain
    /// in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
