//! Request identification and tracing spans.
//!
//! # Responsibilities
//! - Assign a UUID v4 request ID unless the client supplied one
//! - Echo the request ID on the response
//! - Open one span per request carrying method, path, peer and request ID

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{HeaderName, Request},
};
use tracing::Span;

/// Header carrying the request ID in both directions.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID of a request, or `"unknown"` if none was assigned.
pub fn request_id(request: &Request<Body>) -> &str {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span factory for `TraceLayer::make_span_with`.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info_span!(
        "request",
        request_id = %request_id(request),
        method = %request.method(),
        path = %request.uri().path(),
        peer = %peer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_request_id_header() {
        let request = Request::builder()
            .uri("/health")
            .header(X_REQUEST_ID, "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id(&request), "abc-123");
    }

    #[test]
    fn missing_request_id_is_unknown() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        assert_eq!(request_id(&request), "unknown");
    }
}
