pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod metrics_timer;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        account_dto::AccountDto,
        account_list_response::AccountListResponse,
        accounts::{delete_account, get_account, list_accounts, login, register, update_account},
        list_accounts_query::ListAccountsQuery,
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        update_account_request::UpdateAccountRequest,
    },
    envelope::ApiResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        account_id_path::AccountIdPath,
        json_body::JsonBody,
        request_ctx::{REQUEST_ID_HEADER, RequestCtx},
    },
    rate_limit::enforce_rate_limit,
    request_metrics::record_request_metrics,
    route_not_found,
    validation::AccountValidator,
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use metrics::Metrics;
pub use metrics_timer::MetricsTimer;

pub use crate::routes::build_router;
