//! Generation metrics, exported through the Prometheus recorder installed
//! by `service_core::observability::init_metrics`.

use crate::models::ContentType;
use std::time::Duration;

pub fn record_generation(content_type: ContentType, outcome: &'static str) {
    metrics::counter!(
        "content_generation_total",
        "content_type" => content_type.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_provider_latency(provider: &'static str, model: &str, elapsed: Duration) {
    metrics::histogram!(
        "completion_provider_latency_seconds",
        "provider" => provider,
        "model" => model.to_string()
    )
    .record(elapsed.as_secs_f64());
}

pub fn record_tokens(model: &str, input_tokens: u32, output_tokens: u32) {
    metrics::counter!(
        "completion_tokens_total",
        "model" => model.to_string(),
        "type" => "input"
    )
    .increment(u64::from(input_tokens));
    metrics::counter!(
        "completion_tokens_total",
        "model" => model.to_string(),
        "type" => "output"
    )
    .increment(u64::from(output_tokens));
}

pub fn record_provider_error(provider: &'static str, error_kind: &'static str) {
    metrics::counter!(
        "completion_provider_errors_total",
        "provider" => provider,
        "error_type" => error_kind
    )
    .increment(1);
}
