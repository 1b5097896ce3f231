use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use service::errors::ServiceError;

use crate::errors::ApiError;

// Prometheus metrics (default registry)
pub static PUPPY_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "puppy_operations_total",
        "Puppy record operations by outcome",
        &["op", "outcome"]
    )
    .expect("register puppy_operations_total")
});

/// Count one service call under `op`, labelled `ok` or by error kind.
pub fn observe<T>(op: &str, result: &Result<T, ServiceError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    PUPPY_OPERATIONS_TOTAL.with_label_values(&[op, outcome]).inc();
}

/// Count a request rejected before reaching the service (bad id or body).
pub fn rejected(op: &str, rejection: impl Into<ApiError>) -> ApiError {
    PUPPY_OPERATIONS_TOTAL.with_label_values(&[op, "validation"]).inc();
    rejection.into()
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
    match String::from_utf8(buffer) {
        Ok(text) => (axum::http::StatusCode::OK, text),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        ),
    }
}
