//! Prometheus metrics for the trending service.
//!
//! Exposes trending-specific collectors and an HTTP handler for the
//! `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter_vec, Encoder, Histogram,
    HistogramVec, IntCounterVec, TextEncoder,
};

lazy_static! {
    /// Duration of HTTP requests by method, path, and status.
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration segmented by method, path, and status",
        &["method", "path", "status"]
    )
    .expect("failed to register http_request_duration_seconds");

    /// Trending result cache events (hit/miss).
    pub static ref TRENDING_CACHE_EVENTS: IntCounterVec = register_int_counter_vec!(
        "trending_cache_events_total",
        "Trending result cache events segmented by outcome",
        &["event"]
    )
    .expect("failed to register trending_cache_events_total");

    /// Number of candidates evaluated per trending computation.
    pub static ref TRENDING_CANDIDATE_COUNT: Histogram = register_histogram!(
        "trending_candidate_count",
        "Number of candidates evaluated per trending computation"
    )
    .expect("failed to register trending_candidate_count");
}

/// Record an HTTP request observation; called from the server middleware.
pub fn observe_http_request(method: &str, path: &str, status: u16, elapsed: std::time::Duration) {
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path, &status.to_string()])
        .observe(elapsed.as_secs_f64());
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
