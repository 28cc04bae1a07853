use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static STORE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "tutorial_store_operations_total",
        "Store operations by entity, operation and outcome",
        &["entity", "operation", "outcome"]
    )
    .expect("register store_operations_total")
});

/// Count one store call. `outcome` is `ok` or an error kind.
pub fn record_operation(entity: &str, operation: &str, outcome: &str) {
    STORE_OPERATIONS_TOTAL
        .with_label_values(&[entity, operation, outcome])
        .inc();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_operations_are_exported() {
        record_operation("order", "create", "ok");
        let (status, body) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("tutorial_store_operations_total"));
        assert!(body.contains(r#"entity="order""#));
    }
}
