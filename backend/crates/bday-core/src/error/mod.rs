use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("User not found: {username} {location}")]
    NotFound {
        username: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error tied to a request field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(username: S) -> Self {
        CoreError::NotFound {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        CoreError::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
