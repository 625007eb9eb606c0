use bday_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
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

    #[error("Corrupt record for {username}: {message} {location}")]
    CorruptRecord {
        username: String,
        message: String,
        location: ErrorLocation,
    },
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

/// Store failures cross the `RecordStore` seam as opaque storage errors
impl From<DbError> for CoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        CoreError::storage(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
