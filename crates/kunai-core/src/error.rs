use thiserror::Error;

/// Errors shared across the workspace crates
#[derive(Error, Debug)]
pub enum CoreError {
    /// A loaded setting has a value the calendar cannot use.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
