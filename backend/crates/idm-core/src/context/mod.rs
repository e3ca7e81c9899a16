pub mod cancellation;
pub mod request_context;
