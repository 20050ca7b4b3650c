use kunai_core::error::CoreError;
use thiserror::Error;

/// Calendar parsing, arithmetic and timezone errors
#[derive(Error, Debug)]
pub enum DateError {
    /// Format tag not recognized by `parse_date`.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A date component is missing or not an integer.
    #[error("Invalid date component {component:?} in {input:?}")]
    InvalidComponent { input: String, component: String },

    #[error("Invalid ISO-8601 timestamp: {0}")]
    InvalidIso(String),

    /// Zone name not present in the IANA database.
    #[error("Unknown timezone: {0}")]
    UnknownTimeZone(String),

    /// Result falls outside the representable calendar range.
    #[error("Date out of range: {0}")]
    OutOfRange(String),

    #[error(transparent)]
    CoreError(#[from] CoreError),
}

pub type DateResult<T> = std::result::Result<T, DateError>;
