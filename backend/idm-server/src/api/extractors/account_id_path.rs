use crate::{ApiError, AppState};

use idm_core::{AccountId, AppError};

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The `{id}` path segment as an account id.
///
/// Anything that is not a non-negative integer is rejected as invalid
/// parameters before any handler runs.
pub struct AccountIdPath(pub AccountId);

impl FromRequestParts<AppState> for AccountIdPath {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|e| AppError::invalid_params(format!("invalid path: {}", e.body_text())))?;

            match raw.parse::<AccountId>() {
                Ok(id) if id.0 >= 0 => Ok(AccountIdPath(id)),
                _ => Err(AppError::invalid_params(format!("invalid account id '{raw}'")).into()),
            }
        }
    }
}
