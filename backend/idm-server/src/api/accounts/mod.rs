pub mod account_dto;
pub mod account_list_response;
pub mod accounts;
pub mod list_accounts_query;
pub mod login_request;
pub mod login_response;
pub mod register_request;
pub mod update_account_request;
