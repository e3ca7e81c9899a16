use crate::{ErrorKind, ErrorLocation};

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Failure raised anywhere below the request boundary.
///
/// The kind decides code and status. The message is meant for clients of
/// non-internal kinds; the cause and location are for logs only.
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    cause: Option<Cause>,
    location: ErrorLocation,
}

impl AppError {
    #[track_caller]
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Error carrying only the kind's default message
    #[track_caller]
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }

    #[track_caller]
    pub fn wrap<S, E>(kind: ErrorKind, message: S, cause: E) -> Self
    where
        S: Into<String>,
        E: Into<Cause>,
    {
        Self {
            kind,
            message: message.into(),
            cause: Some(cause.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_params<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::InvalidParams, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> u32 {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn location(&self) -> &ErrorLocation {
        &self.location
    }

    /// Message safe to hand to a client.
    ///
    /// Kinds rendered as 500 always use the taxonomy default; everything
    /// else falls back to the default only when the message is empty.
    pub fn public_message(&self) -> &str {
        if self.kind.is_internal() || self.message.is_empty() {
            self.kind.default_message()
        } else {
            &self.message
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {}] {}",
            self.kind.code(),
            self.kind,
            if self.message.is_empty() {
                self.kind.default_message()
            } else {
                &self.message
            }
        )?;
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        write!(f, " {}", self.location)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}
