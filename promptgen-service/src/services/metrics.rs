//! Prometheus metrics for promptgen-service.
//!
//! HTTP request metrics come from `service_core::middleware::metrics`; this
//! module adds provider call counters and exposes the scrape output.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder. Safe to call more than once.
pub fn init_metrics() {
    if METRICS_HANDLE.get().is_some() {
        return;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = METRICS_HANDLE.set(handle);
        }
        Err(e) => tracing::warn!("Failed to install Prometheus recorder: {}", e),
    }
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record one outbound generation call.
pub fn record_provider_call(provider: &str, operation: &str, status: &str, latency: Duration) {
    let labels = [
        ("provider", provider.to_string()),
        ("operation", operation.to_string()),
        ("status", status.to_string()),
    ];
    counter!("promptgen_provider_calls_total", &labels).increment(1);
    histogram!("promptgen_provider_latency_seconds", &labels).record(latency.as_secs_f64());
}

/// Record token usage reported by the provider.
pub fn record_tokens(provider: &str, input_tokens: i32, output_tokens: i32) {
    counter!("promptgen_tokens_total", "provider" => provider.to_string(), "type" => "input")
        .increment(input_tokens.max(0) as u64);
    counter!("promptgen_tokens_total", "provider" => provider.to_string(), "type" => "output")
        .increment(output_tokens.max(0) as u64);
}
