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

    #[error("Invalid UTC offset: {minutes} minutes {location}")]
    InvalidUtcOffset {
        minutes: i32,
        location: ErrorLocation,
    },

    #[error("Invalid date '{value}': {source} {location}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
