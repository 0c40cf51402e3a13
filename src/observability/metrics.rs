//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by route template and
//!   status code
//! - `gateway_request_duration_seconds` (histogram): latency
//!   distribution with the same labels

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Exporter failure is logged; the gateway keeps serving.
pub fn init(address: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(address).install() {
        Ok(()) => tracing::info!(address = %address, "Metrics exporter started"),
        Err(error) => tracing::error!(error = %error, "Failed to start metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    let labels = [("route", route.to_string()), ("status", status.to_string())];
    metrics::counter!("gateway_requests_total", &labels).increment(1);
    metrics::histogram!("gateway_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}
