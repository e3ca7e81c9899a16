use crate::{Cancelled, ErrorLocation};

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// Column guarded by a uniqueness constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure conditions of an [`AccountStore`](crate::AccountStore).
///
/// `NotFound` and `Duplicate` are expected outcomes the workflow branches on;
/// `Backend` is anything else the persistence engine reported.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Account not found: {lookup} {location}")]
    NotFound {
        lookup: String,
        location: ErrorLocation,
    },

    #[error("Duplicate {field} {location}")]
    Duplicate {
        field: UniqueField,
        location: ErrorLocation,
    },

    #[error("Store operation cancelled: {source} {location}")]
    Cancelled {
        #[source]
        source: Cancelled,
        location: ErrorLocation,
    },

    #[error("Store backend error: {message}: {source} {location}")]
    Backend {
        message: String,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(lookup: S) -> Self {
        Self::NotFound {
            lookup: lookup.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate(field: UniqueField) -> Self {
        Self::Duplicate {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self::Backend {
            message: message.into(),
            source: source.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

impl From<Cancelled> for StoreError {
    #[track_caller]
    fn from(source: Cancelled) -> Self {
        Self::Cancelled {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
