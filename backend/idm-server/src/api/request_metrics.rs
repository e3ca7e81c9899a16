use crate::{AppState, MetricsTimer};

use idm_core::ErrorKind;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Counts every API response by method and status, plus the error kind
/// when the response is an error envelope
pub async fn record_request_metrics(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let timer = MetricsTimer::new(state.metrics.clone());

    let response = next.run(request).await;

    timer.finish();
    state
        .metrics
        .request_completed(&method, response.status().as_u16());
    if let Some(kind) = response.extensions().get::<ErrorKind>() {
        state.metrics.error_occurred(*kind);
    }

    response
}
