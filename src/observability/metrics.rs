//! Metrics collection and exposition.
//!
//! # Metrics
//! - `imc_http_requests_total` (counter): requests by method, path, status
//! - `imc_http_request_duration_seconds` (histogram): latency by method, path
//! - `imc_classifications_total` (counter): results by category
//!
//! # Design Decisions
//! - Paths are the matched route template, never the raw URI, to keep
//!   label cardinality bounded
//! - The Prometheus exporter is only installed when enabled in config

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::classification::Category;

pub const REQUESTS_TOTAL: &str = "imc_http_requests_total";
pub const REQUEST_DURATION: &str = "imc_http_request_duration_seconds";
pub const CLASSIFICATIONS_TOTAL: &str = "imc_classifications_total";

/// Label used for requests that matched no route.
const UNMATCHED: &str = "unmatched";

/// Install the Prometheus recorder and start its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    metrics::counter!(
        REQUESTS_TOTAL,
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        REQUEST_DURATION,
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one successful classification.
pub fn record_classification(category: Category) {
    metrics::counter!(CLASSIFICATIONS_TOTAL, "classificacao" => category.label()).increment(1);
}

/// Middleware recording request count and latency for every response.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED.to_string());

    let response = next.run(request).await;
    record_request(&method, &path, response.status().as_u16(), start);
    response
}
