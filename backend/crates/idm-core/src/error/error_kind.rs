//! Closed error taxonomy shared by every layer.
//!
//! Codes are grouped by range: `1xxx` generic, `2xxx` account, `4xxx`
//! persistence, `5xxx` cache, `6xxx` queue. Codes and default messages are
//! part of the wire contract and must not change once published.

use std::fmt;

use http::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InternalError,
    InvalidParams,
    NotFound,
    Unauthorized,
    Forbidden,
    TooManyRequests,
    UserNotFound,
    UserAlreadyExists,
    InvalidCredential,
    UserDisabled,
    DatabaseError,
    /// Reserved for cache collaborators
    CacheError,
    /// Reserved for queue collaborators
    QueueError,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 13] = [
        Self::InternalError,
        Self::InvalidParams,
        Self::NotFound,
        Self::Unauthorized,
        Self::Forbidden,
        Self::TooManyRequests,
        Self::UserNotFound,
        Self::UserAlreadyExists,
        Self::InvalidCredential,
        Self::UserDisabled,
        Self::DatabaseError,
        Self::CacheError,
        Self::QueueError,
    ];

    /// Stable numeric code rendered in response envelopes
    pub const fn code(self) -> u32 {
        match self {
            Self::InternalError => 1000,
            Self::InvalidParams => 1001,
            Self::NotFound => 1002,
            Self::Unauthorized => 1003,
            Self::Forbidden => 1004,
            Self::TooManyRequests => 1005,
            Self::UserNotFound => 2000,
            Self::UserAlreadyExists => 2001,
            Self::InvalidCredential => 2002,
            Self::UserDisabled => 2003,
            Self::DatabaseError => 4000,
            Self::CacheError => 5000,
            Self::QueueError => 6000,
        }
    }

    pub const fn default_message(self) -> &'static str {
        match self {
            Self::InternalError => "internal server error",
            Self::InvalidParams => "invalid parameters",
            Self::NotFound => "resource not found",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::TooManyRequests => "too many requests",
            Self::UserNotFound => "user not found",
            Self::UserAlreadyExists => "user already exists",
            Self::InvalidCredential => "invalid password",
            Self::UserDisabled => "user is disabled",
            Self::DatabaseError => "database error",
            Self::CacheError => "cache error",
            Self::QueueError => "message queue error",
        }
    }

    /// Transport status for this kind.
    ///
    /// Only the not-found family, auth, validation and rate limiting get a
    /// dedicated status; every other kind renders as 500.
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::NotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InvalidParams => StatusCode::BAD_REQUEST,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Kinds rendered as 500 never expose their specific message
    pub fn is_internal(self) -> bool {
        self.http_status() == StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InternalError => "INTERNAL_ERROR",
            Self::InvalidParams => "INVALID_PARAMS",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::TooManyRequests => "TOO_MANY_REQUESTS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::UserDisabled => "USER_DISABLED",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::CacheError => "CACHE_ERROR",
            Self::QueueError => "QUEUE_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
