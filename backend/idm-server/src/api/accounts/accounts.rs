//! Account REST API handlers
//!
//! Each handler validates its input, runs one workflow operation under the
//! request context and wraps the result in the envelope.

use crate::{
    AccountDto, AccountIdPath, AccountListResponse, AccountValidator, ApiResponse, ApiResult,
    AppState, JsonBody, ListAccountsQuery, LoginRequest, LoginResponse, RegisterRequest,
    RequestCtx, UpdateAccountRequest,
};

use axum::extract::{Query, State, rejection::QueryRejection};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/accounts/register
pub async fn register(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<ApiResponse<AccountDto>> {
    AccountValidator::validate_register(&req, &state.validation)?;

    let account = state.workflow.register(&ctx, req.into()).await?;

    log::info!(
        "{} Registered account {} ({}) in {}ms",
        ctx.log_prefix(),
        account.id,
        account.username,
        ctx.elapsed_ms()
    );

    Ok(ApiResponse::success(account.into()))
}

/// POST /api/v1/accounts/login
pub async fn login(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<ApiResponse<LoginResponse>> {
    AccountValidator::validate_login(&req)?;

    let authenticated = state
        .workflow
        .authenticate(&ctx, &req.username, &req.password)
        .await?;

    log::info!(
        "{} Account {} logged in",
        ctx.log_prefix(),
        authenticated.account.id
    );

    Ok(ApiResponse::success(authenticated.into()))
}

/// GET /api/v1/accounts/{id}
pub async fn get_account(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
    AccountIdPath(id): AccountIdPath,
) -> ApiResult<ApiResponse<AccountDto>> {
    let account = state.workflow.get_by_id(&ctx, id).await?;

    Ok(ApiResponse::success(account.into()))
}

/// PUT /api/v1/accounts/{id}
pub async fn update_account(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
    AccountIdPath(id): AccountIdPath,
    JsonBody(req): JsonBody<UpdateAccountRequest>,
) -> ApiResult<ApiResponse<AccountDto>> {
    AccountValidator::validate_update(&req, &state.validation)?;

    let account = state.workflow.update(&ctx, id, req.into()).await?;

    log::info!("{} Updated account {}", ctx.log_prefix(), account.id);

    Ok(ApiResponse::success(account.into()))
}

/// DELETE /api/v1/accounts/{id}
///
/// Succeeds whether or not the account existed.
pub async fn delete_account(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
    AccountIdPath(id): AccountIdPath,
) -> ApiResult<ApiResponse<()>> {
    state.workflow.delete(&ctx, id).await?;

    log::info!("{} Deleted account {}", ctx.log_prefix(), id);

    Ok(ApiResponse::empty())
}

/// GET /api/v1/accounts?page=&page_size=
pub async fn list_accounts(
    State(state): State<AppState>,
    RequestCtx(ctx): RequestCtx,
    query: Result<Query<ListAccountsQuery>, QueryRejection>,
) -> ApiResult<ApiResponse<AccountListResponse>> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(e) => {
            log::debug!("{} Ignoring unparsable query: {}", ctx.log_prefix(), e);
            ListAccountsQuery::default()
        }
    };

    let page = state
        .workflow
        .list(&ctx, query.page(), query.page_size())
        .await?;

    Ok(ApiResponse::success(page.into()))
}
