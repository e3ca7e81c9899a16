use idm_core::{ErrorLocation, StoreError, UniqueField};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid row in {table}: {message} {location}")]
    InvalidRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Column named by a UNIQUE constraint failure, if this is one
    pub fn unique_violation(&self) -> Option<UniqueField> {
        let Self::Sqlx {
            source: sqlx::Error::Database(db_err),
            ..
        } = self
        else {
            return None;
        };

        if !db_err.is_unique_violation() {
            return None;
        }

        // SQLite: "UNIQUE constraint failed: accounts.username"
        let message = db_err.message();
        if message.contains("accounts.username") {
            Some(UniqueField::Username)
        } else if message.contains("accounts.email") {
            Some(UniqueField::Email)
        } else {
            None
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        match err.unique_violation() {
            Some(field) => StoreError::duplicate(field),
            None => StoreError::backend("sqlite", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
