//! Metrics collection and exposition.
//!
//! # Metrics
//! - `frontend_backend_requests_total` (counter): backend calls by method, path, status
//! - `frontend_backend_request_duration_seconds` (histogram): backend call latency
//!
//! Transport failures are recorded with status `error`.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one backend call.
pub fn record_backend_call(method: &'static str, path: &str, status: &str, start: Instant) {
    let path = path.to_string();
    let status = status.to_string();

    ::metrics::counter!(
        "frontend_backend_requests_total",
        "method" => method,
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);

    ::metrics::histogram!(
        "frontend_backend_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}
