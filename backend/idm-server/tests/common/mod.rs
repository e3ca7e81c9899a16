#![allow(dead_code)]

//! Test infrastructure for idm-server API tests

use idm_account::AccountService;
use idm_auth::{Argon2Hasher, JwtTokenIssuer, RateLimitConfig, RequestRateLimiter};
use idm_config::ValidationConfig;
use idm_core::{AccountId, AccountStatus, AccountStore, CancellationSource, RequestContext};
use idm_db::{SqliteAccountStore, create_memory_pool, run_migrations};
use idm_server::{AppState, Metrics};

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Handle to the process-wide recorder, installed on first use
pub fn prometheus_handle() -> PrometheusHandle {
    PROMETHEUS
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("Failed to install metrics recorder")
        })
        .clone()
}

/// Create a migrated store over an in-memory database
pub async fn create_test_store() -> Arc<SqliteAccountStore> {
    let pool = create_memory_pool()
        .await
        .expect("Failed to create test database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    Arc::new(SqliteAccountStore::new(pool))
}

/// Create AppState for testing, with the store exposed for direct setup
pub async fn create_test_app_state() -> (AppState, Arc<SqliteAccountStore>) {
    create_test_app_state_with_limit(RateLimitConfig {
        max_requests: 10_000,
        window_secs: 60,
    })
    .await
}

pub async fn create_test_app_state_with_limit(
    rate_limit: RateLimitConfig,
) -> (AppState, Arc<SqliteAccountStore>) {
    let store = create_test_store().await;
    let hasher = Argon2Hasher::with_params(1024, 1, 1).expect("valid argon2 params");
    let tokens = JwtTokenIssuer::with_hs256(TEST_SECRET, "idm", Duration::from_secs(3600))
        .expect("valid token issuer");

    let workflow = AccountService::new(store.clone(), Arc::new(hasher), Arc::new(tokens));

    let state = AppState {
        workflow: Arc::new(workflow),
        validation: ValidationConfig::default(),
        rate_limiter: Arc::new(RequestRateLimiter::new(rate_limit)),
        shutdown: CancellationSource::new(),
        handler_timeout: Duration::from_secs(30),
        metrics: Metrics::new(),
        prometheus: prometheus_handle(),
    };

    (state, store)
}

/// Send one request through the router and decode the JSON body
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// Register an account over HTTP and return its id
pub async fn register_account(app: Router, username: &str, password: &str) -> i64 {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/accounts/register",
        Some(serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": password,
            "display_name": format!("{username} display"),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "register failed: {json}");
    json["data"]["id"].as_i64().expect("account id")
}

/// Flip an account to disabled directly in the store
pub async fn disable_account(store: &SqliteAccountStore, id: i64) {
    let ctx = RequestContext::background();
    let mut account = store
        .get_by_id(&ctx, AccountId(id))
        .await
        .expect("account exists");
    account.status = AccountStatus::Disabled;
    store.update(&ctx, &account).await.expect("update status");
}
