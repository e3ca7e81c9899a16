pub mod account_id_path;
pub mod json_body;
pub mod request_ctx;
