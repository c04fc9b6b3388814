//! Tracing setup and HTTP request instrumentation.
//!
//! Every request gets a span carrying the method, the normalized route, the
//! response status, and the latency. Paths are normalized before they hit
//! the logs so per-row UUIDs do not explode log cardinality.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info_span, Instrument};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` controls the filter (default `info`); `FELT_LOG_FORMAT=json`
/// switches to newline-delimited JSON for log shippers.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var("FELT_LOG_FORMAT")
        .map(|s| s.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
        .expect("UUID regex is valid")
});

/// Replace row identifiers in a path with a placeholder.
fn normalize_path(path: &str) -> String {
    UUID_RE.replace_all(path, "{id}").to_string()
}

/// Request logging middleware.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let route = normalize_path(&path);

    let span = info_span!(
        "http_request",
        http.method = %method,
        http.route = %route,
    );

    let response = next.run(request).instrument(span).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::error!(%method, %route, %status, latency_ms, "request failed");
    } else {
        tracing::info!(%method, %route, %status, latency_ms, "request completed");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_replaces_uuids() {
        let path = "/api/products/0192f0c1-2d3e-7a4b-8c5d-6e7f80912345";
        assert_eq!(normalize_path(path), "/api/products/{id}");
    }

    #[test]
    fn test_normalize_path_leaves_slugs_alone() {
        assert_eq!(
            normalize_path("/api/public/products/tournament-9ft"),
            "/api/public/products/tournament-9ft"
        );
    }
}
