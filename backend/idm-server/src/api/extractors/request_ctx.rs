use crate::AppState;

use idm_core::RequestContext;

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying a caller-supplied correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request context.
///
/// Uses the `X-Request-Id` header as correlation id when present, carries
/// the handler deadline and subscribes to the process shutdown signal.
pub struct RequestCtx(pub RequestContext);

impl FromRequestParts<AppState> for RequestCtx {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let correlation_id = parts
                .headers
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .unwrap_or_default();

            let ctx = RequestContext::new(correlation_id)
                .with_timeout(state.handler_timeout)
                .with_signal(state.shutdown.signal());

            log::debug!(
                "{} {} {}",
                ctx.log_prefix(),
                parts.method,
                parts.uri.path()
            );

            Ok(RequestCtx(ctx))
        }
    }
}
