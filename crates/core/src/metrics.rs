//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Ranking (candidate list sizes)
//! - Stream building (records built, failed requests)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts};

// =============================================================================
// Ranking Metrics
// =============================================================================

/// Candidates per ranking call.
pub static CANDIDATES_RANKED: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "torrentstream_candidates_ranked",
            "Number of torrent candidates per ranking call",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]),
    )
    .unwrap()
});

// =============================================================================
// Stream Metrics
// =============================================================================

/// Stream records built by locale.
pub static STREAMS_BUILT: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "torrentstream_streams_built_total",
            "Total stream records built",
        ),
        &["locale"],
    )
    .unwrap()
});

/// Failed stream requests by error kind.
pub static STREAM_ERRORS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "torrentstream_stream_errors_total",
            "Total stream requests that failed",
        ),
        &["kind"], // "file_index_out_of_range", "vocabulary"
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CANDIDATES_RANKED.clone()),
        Box::new(STREAMS_BUILT.clone()),
        Box::new(STREAM_ERRORS.clone()),
    ]
}
