pub mod accounts;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod rate_limit;
pub mod request_metrics;
pub mod validation;

use crate::ApiError;

use idm_core::{AppError, ErrorKind};

/// Fallback for unknown routes under `/api/v1`
pub async fn route_not_found() -> ApiError {
    AppError::from_kind(ErrorKind::NotFound).into()
}
