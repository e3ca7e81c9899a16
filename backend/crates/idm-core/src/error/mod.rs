pub mod app_error;
pub mod error_kind;

// -------------------------------------------------------------------------- //

use crate::AppError;

use std::result::Result as StdResult;

/// Code carried by every success envelope
pub const SUCCESS_CODE: u32 = 0;

/// Message carried by every success envelope
pub const SUCCESS_MESSAGE: &str = "success";

pub type Result<T> = StdResult<T, AppError>;
