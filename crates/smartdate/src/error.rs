//! Error types for smartdate operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
