use idm_auth::AuthError;
use idm_config::ConfigError;
use idm_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Startup and shutdown failures of the server process
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] AuthError),

    #[error("I/O error while {action}: {source} {location}")]
    Io {
        action: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Metrics recorder error: {message} {location}")]
    Metrics {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl ServerError {
    #[track_caller]
    pub fn io<S: Into<String>>(action: S, source: std::io::Error) -> Self {
        Self::Io {
            action: action.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn metrics<S: Into<String>>(message: S) -> Self {
        Self::Metrics {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
