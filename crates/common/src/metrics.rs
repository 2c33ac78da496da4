use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, register_int_gauge, Encoder, IntCounterVec, IntGauge, TextEncoder};

// Prometheus metrics (default registry)
pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "campaign_tracker_operations_total",
        "Total campaign operations handled, by operation",
        &["op"]
    )
    .expect("register operations_total")
});

pub static OPERATION_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "campaign_tracker_operation_errors_total",
        "Total failed campaign operations, by operation",
        &["op"]
    )
    .expect("register operation_errors_total")
});

pub static CAMPAIGNS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "campaign_tracker_campaigns",
        "Number of campaigns in the collection after the last store round trip"
    )
    .expect("register campaigns")
});

pub fn record_operation(op: &str) {
    OPERATIONS_TOTAL.with_label_values(&[op]).inc();
}

pub fn record_error(op: &str) {
    OPERATION_ERRORS_TOTAL.with_label_values(&[op]).inc();
}

pub fn set_campaign_count(n: usize) {
    CAMPAIGNS.set(i64::try_from(n).unwrap_or(i64::MAX));
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
