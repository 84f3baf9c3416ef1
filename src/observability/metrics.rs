//! Metrics collection and exposition.
//!
//! # Metrics
//! - `redactor_requests_total` (counter): forwarded requests by outcome, status
//! - `redactor_request_duration_seconds` (histogram): end-to-end latency
//! - `redactor_orders_redacted_total` (counter): orders passed through redaction
//!
//! Recording is a no-op until `init_metrics` installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "redactor_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "redactor_request_duration_seconds";
pub const ORDERS_REDACTED_TOTAL: &str = "redactor_orders_redacted_total";

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one forwarded request. `outcome` is `ok` or an error kind.
pub fn record_request(outcome: &'static str, status: u16, start: Instant) {
    counter!(
        REQUESTS_TOTAL,
        "outcome" => outcome,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(REQUEST_DURATION_SECONDS, "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_orders_redacted(count: usize) {
    counter!(ORDERS_REDACTED_TOTAL).increment(count as u64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_names() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_orders_redacted(3);
            record_orders_redacted(2);
            record_request("ok", 200, Instant::now());
        });

        let rendered = handle.render();
        assert!(rendered.contains("redactor_orders_redacted_total 5"), "{rendered}");
        assert!(rendered.contains("redactor_requests_total{"), "{rendered}");
        assert!(rendered.contains("outcome=\"ok\""), "{rendered}");
        assert!(rendered.contains("redactor_request_duration_seconds"), "{rendered}");
    }
}
