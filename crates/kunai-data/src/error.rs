use thiserror::Error;

/// Errors raised by the structural helpers
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DataError {
    #[error("Invalid chunk size: {0} (must be at least 1)")]
    InvalidChunkSize(usize),
}

pub type DataResult<T> = std::result::Result<T, DataError>;
