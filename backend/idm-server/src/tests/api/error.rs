use crate::ApiError;

use idm_auth::AuthError;
use idm_core::{AppError, ErrorKind, ErrorLocation};

use std::panic::Location;

use axum::response::IntoResponse;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_params_returns_400_with_specific_message() {
    let (status, json) = render(AppError::invalid_params("password is required").into()).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["code"], 1001);
    assert_eq!(json["message"], "password is required");
    assert_that!(json.get("data"), none());
}

#[tokio::test]
async fn test_user_not_found_returns_404() {
    let (status, json) = render(AppError::from_kind(ErrorKind::UserNotFound).into()).await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_eq!(json["code"], 2000);
    assert_eq!(json["message"], "user not found");
}

#[tokio::test]
async fn test_account_kinds_render_as_500_with_default_message() {
    for kind in [
        ErrorKind::UserAlreadyExists,
        ErrorKind::InvalidCredential,
        ErrorKind::UserDisabled,
    ] {
        let error = AppError::new(kind, "username already exists");
        let (status, json) = render(error.into()).await;

        assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(json["code"], kind.code());
        assert_eq!(json["message"], kind.default_message());
    }
}

#[tokio::test]
async fn test_every_kind_renders_its_taxonomy_status_and_code() {
    for kind in ErrorKind::ALL {
        let (status, json) = render(AppError::from_kind(kind).into()).await;

        assert_that!(status, eq(kind.http_status()));
        assert_eq!(json["code"], kind.code());
    }
}

#[tokio::test]
async fn test_wrapped_cause_is_not_rendered() {
    let cause = std::io::Error::other("disk I/O error at /var/lib/idm/accounts.db");
    let error = AppError::wrap(ErrorKind::DatabaseError, "failed to create account", cause);
    let (_, json) = render(error.into()).await;

    assert_eq!(json["message"], "database error");
    assert_that!(json.to_string(), not(contains_substring("/var/lib")));
}

#[tokio::test]
async fn test_rate_limit_error_maps_to_too_many_requests() {
    let error = AuthError::RateLimitExceeded {
        limit: 10,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    };
    let api_error = ApiError::from(error);

    assert_that!(api_error.kind(), eq(ErrorKind::TooManyRequests));

    let (status, json) = render(api_error).await;
    assert_that!(status, eq(StatusCode::TOO_MANY_REQUESTS));
    assert_eq!(json["code"], 1005);
    assert_eq!(json["message"], "too many requests");
}

#[test]
fn test_token_errors_map_to_unauthorized() {
    let error = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };

    assert_that!(ApiError::from(error).kind(), eq(ErrorKind::Unauthorized));
}

#[test]
fn test_rendered_response_carries_error_kind_extension() {
    let response = ApiError::from(AppError::from_kind(ErrorKind::UserAlreadyExists)).into_response();

    let kind = response.extensions().get::<ErrorKind>().copied();

    assert_that!(kind, some(eq(ErrorKind::UserAlreadyExists)));
}
