pub mod account_store;
pub mod store_error;
