use crate::Metrics;

use idm_account::AccountWorkflow;
use idm_auth::RequestRateLimiter;
use idm_config::ValidationConfig;
use idm_core::CancellationSource;

use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<dyn AccountWorkflow>,
    pub validation: ValidationConfig,
    pub rate_limiter: Arc<RequestRateLimiter>,
    /// Triggered on shutdown; every request context subscribes to it
    pub shutdown: CancellationSource,
    /// Deadline applied to each request's workflow call
    pub handler_timeout: Duration,
    pub metrics: Metrics,
    /// Renders the recorder's state for `GET /metrics`
    pub prometheus: PrometheusHandle,
}
