use crate::ApiResponse;

use idm_core::{AppError, ErrorKind};

use axum::response::IntoResponse;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;

#[test]
fn test_success_envelope_carries_data() {
    let value = serde_json::to_value(ApiResponse::success(json!({"id": 7}))).unwrap();

    assert_eq!(value, json!({"code": 0, "message": "success", "data": {"id": 7}}));
}

#[test]
fn test_empty_envelope_omits_data() {
    let value = serde_json::to_value(ApiResponse::<()>::empty()).unwrap();

    assert_eq!(value, json!({"code": 0, "message": "success"}));
    assert_that!(value.get("data"), none());
}

#[test]
fn test_failure_envelope_uses_kind_code_and_public_message() {
    let error = AppError::invalid_params("username must be at least 3 characters");
    let value = serde_json::to_value(ApiResponse::<()>::failure(&error)).unwrap();

    assert_eq!(
        value,
        json!({"code": 1001, "message": "username must be at least 3 characters"})
    );
}

#[test]
fn test_failure_envelope_hides_internal_detail() {
    let error = AppError::new(ErrorKind::DatabaseError, "constraint accounts.email violated");
    let value = serde_json::to_value(ApiResponse::<()>::failure(&error)).unwrap();

    assert_eq!(value["code"], 4000);
    assert_eq!(value["message"], "database error");
}

#[tokio::test]
async fn test_success_renders_with_200() {
    let response = ApiResponse::success("payload").into_response();

    assert_that!(response.status(), eq(StatusCode::OK));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["data"], "payload");
}
