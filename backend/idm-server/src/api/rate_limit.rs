use crate::{ApiError, AppState};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Rejects the request with a `TooManyRequests` envelope once the
/// process-wide quota is spent
pub async fn enforce_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(e) = state.rate_limiter.check() {
        return ApiError::from(e).into_response();
    }

    next.run(request).await
}
