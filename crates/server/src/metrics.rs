//! Prometheus metrics for observability.
//!
//! HTTP request metrics (latency, counts, in-flight) live here; ranking and
//! stream metrics come from `torrentstream_core::metrics` and share the
//! same registry.

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use regex_lite::Regex;

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
            "torrentstream_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("torrentstream_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "torrentstream_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
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

    // Core metrics (ranking, stream building)
    for metric in torrentstream_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all registered metrics in the Prometheus text format.
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

static TOKEN_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/auth/[^/]+").unwrap());
static HASH_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9a-fA-F]{40}").unwrap());
static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+(/|$)").unwrap());

/// Normalize a path for metric labels (replace tokens and IDs with placeholders).
pub fn normalize_path(path: &str) -> String {
    let result = TOKEN_SEGMENT.replace_all(path, "/auth/{token}");
    let result = HASH_SEGMENT.replace_all(&result, "{hash}");
    let result = NUMERIC_SEGMENT.replace_all(&result, "/{id}$1");
    result.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_token() {
        let path = "/api/v1/auth/device-abc123/streams";
        assert_eq!(normalize_path(path), "/api/v1/auth/{token}/streams");
    }

    #[test]
    fn test_normalize_path_hash() {
        let path = "/api/v1/streams/a94a8fe5ccb19ba61c4c0873d391e987982fbbd3";
        assert_eq!(normalize_path(path), "/api/v1/streams/{hash}");
    }

    #[test]
    fn test_normalize_path_numeric() {
        let path = "/api/v1/things/12345/parts/2";
        assert_eq!(normalize_path(path), "/api/v1/things/{id}/parts/{id}");
    }

    #[test]
    fn test_normalize_path_no_ids() {
        assert_eq!(normalize_path("/api/v1/health"), "/api/v1/health");
        assert_eq!(normalize_path("/metrics"), "/metrics");
    }

    #[test]
    fn test_encode_metrics_returns_prometheus_format() {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/test", "200"])
            .inc();

        let output = encode_metrics().unwrap();
        assert!(output.contains("torrentstream_http_requests_total"));
        assert!(output.contains("# HELP"));
        assert!(output.contains("# TYPE"));
    }

    #[test]
    fn test_registry_contains_core_metrics() {
        HTTP_REQUESTS_IN_FLIGHT.set(0);
        torrentstream_core::metrics::CANDIDATES_RANKED.observe(3.0);
        torrentstream_core::metrics::STREAM_ERRORS
            .with_label_values(&["vocabulary"])
            .inc_by(0);

        let output = encode_metrics().unwrap();

        assert!(output.contains("torrentstream_http_requests_in_flight"));
        assert!(output.contains("torrentstream_candidates_ranked"));
        assert!(output.contains("torrentstream_stream_errors_total"));
    }
}
