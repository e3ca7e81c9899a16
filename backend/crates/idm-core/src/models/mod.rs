pub mod account;
pub mod account_id;
pub mod account_page;
pub mod account_status;
pub mod new_account;
