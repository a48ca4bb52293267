//! Metrics collection and exposition.
//!
//! # Metrics
//! - `facade_requests_total` (counter): requests by operation, status
//! - `facade_request_duration_seconds` (histogram): latency by operation
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade and is a no-op until an
//!   exporter is installed
//! - The operation label comes from the matched route template, never the
//!   raw path; anything else is `unmatched`

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter")
        }
    }
}

/// Record one completed facade request.
pub fn record_request(operation: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "facade_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("facade_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}
