//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the Freeshelf server:
//! - HTTP request metrics (latency, counts, errors)
//! - Upstream source fetch metrics
//! - Feed composition and library metrics

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "freeshelf_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("freeshelf_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "freeshelf_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

/// Authentication failures.
pub static AUTH_FAILURES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "freeshelf_auth_failures_total",
            "Total authentication failures",
        ),
        &["reason"],
    )
    .unwrap()
});

// =============================================================================
// Source Metrics
// =============================================================================

/// Upstream source fetches by source and outcome.
pub static SOURCE_FETCHES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "freeshelf_source_fetches_total",
            "Upstream catalog fetches by source and outcome",
        ),
        &["source", "outcome"],
    )
    .unwrap()
});

/// Responses served from the snapshot cache instead of upstream.
pub static CACHE_SERVED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "freeshelf_cache_served_total",
            "Catalog responses served from the snapshot cache",
        ),
        &["key"],
    )
    .unwrap()
});

// =============================================================================
// Feed and Library Metrics
// =============================================================================

/// Personalized feeds composed.
pub static FEEDS_COMPOSED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "freeshelf_feeds_composed_total",
        "Personalized feeds composed since startup",
    )
    .unwrap()
});

/// Library claims by outcome (claimed, duplicate, unclaimed).
pub static CLAIMS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("freeshelf_claims_total", "Library claim operations"),
        &["outcome"],
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();
    registry
        .register(Box::new(AUTH_FAILURES_TOTAL.clone()))
        .unwrap();

    registry
        .register(Box::new(SOURCE_FETCHES_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(CACHE_SERVED_TOTAL.clone()))
        .unwrap();

    registry
        .register(Box::new(FEEDS_COMPOSED_TOTAL.clone()))
        .unwrap();
    registry.register(Box::new(CLAIMS_TOTAL.clone())).unwrap();
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Normalize a path for metric labels (replace IDs with placeholders).
pub fn normalize_path(path: &str) -> String {
    let numeric_regex = regex_lite::Regex::new(r"/\d+(/|$)").unwrap();
    numeric_regex.replace_all(path, "/{id}$1").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_numeric() {
        let path = "/api/v1/games/12345";
        assert_eq!(normalize_path(path), "/api/v1/games/{id}");
    }

    #[test]
    fn test_normalize_path_numeric_middle() {
        let path = "/api/v1/library/452/extra";
        assert_eq!(normalize_path(path), "/api/v1/library/{id}/extra");
    }

    #[test]
    fn test_normalize_path_no_ids() {
        let path = "/api/v1/health";
        assert_eq!(normalize_path(path), "/api/v1/health");
    }

    #[test]
    fn test_encode_metrics_returns_prometheus_format() {
        // Access metrics to ensure they're initialized
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/test", "200"])
            .inc();

        let output = encode_metrics();
        assert!(output.contains("freeshelf_http_requests_total"));
        assert!(output.contains("# HELP"));
        assert!(output.contains("# TYPE"));
    }

    #[test]
    fn test_registry_contains_all_metrics() {
        // Touch all metrics to ensure they appear in output
        // (Prometheus only outputs metrics that have been accessed)
        HTTP_REQUEST_DURATION
            .with_label_values(&["GET", "/test", "200"])
            .observe(0.1);
        HTTP_REQUESTS_IN_FLIGHT.set(0);
        SOURCE_FETCHES_TOTAL
            .with_label_values(&["freetogame", "ok"])
            .inc();
        CACHE_SERVED_TOTAL.with_label_values(&["games"]).inc();
        FEEDS_COMPOSED_TOTAL.inc();
        CLAIMS_TOTAL.with_label_values(&["claimed"]).inc();

        let output = encode_metrics();

        assert!(output.contains("freeshelf_http_request_duration_seconds"));
        assert!(output.contains("freeshelf_http_requests_in_flight"));
        assert!(output.contains("freeshelf_source_fetches_total"));
        assert!(output.contains("freeshelf_cache_served_total"));
        assert!(output.contains("freeshelf_feeds_composed_total"));
        assert!(output.contains("freeshelf_claims_total"));
    }
}
