use idm_core::ErrorKind;

use std::time::Duration;

use metrics::{counter, histogram};

/// Metrics collector for API requests
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "idm" }
    }

    /// Record a request that produced a response
    pub fn request_completed(&self, method: &str, status: u16) {
        counter!(
            format!("{}_http_requests_total", self.prefix),
            "method" => method.to_string(),
            "status" => status.to_string()
        )
        .increment(1);
    }

    /// Record a failure rendered as an error envelope
    pub fn error_occurred(&self, kind: ErrorKind) {
        counter!(format!("{}_errors_total", self.prefix), "kind" => kind.as_str()).increment(1);
    }

    /// Record request handling latency
    pub fn request_latency(&self, duration: Duration) {
        histogram!(format!("{}_http_request_duration_ms", self.prefix))
            .record(duration.as_secs_f64() * 1000.0);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
