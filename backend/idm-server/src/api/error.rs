//! Boundary rendering of failures.
//!
//! Status and code come from the error kind alone. The full error, cause
//! chain and capture location included, goes to the log; the client only
//! sees the public message.

use crate::api::envelope::ApiResponse;

use idm_auth::AuthError;
use idm_core::{AppError, ErrorKind};

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] AppError);

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        self.0.kind()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        if kind.is_internal() {
            log::error!("{}", self.0);
        } else {
            log::warn!("{}", self.0);
        }

        let mut response =
            (kind.http_status(), Json(ApiResponse::<()>::failure(&self.0))).into_response();
        // Read back by the request metrics middleware
        response.extensions_mut().insert(kind);
        response
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let kind = match e {
            AuthError::RateLimitExceeded { .. } => ErrorKind::TooManyRequests,
            AuthError::TokenExpired { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => ErrorKind::Unauthorized,
            _ => ErrorKind::InternalError,
        };
        Self(AppError::wrap(kind, kind.default_message(), e))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
