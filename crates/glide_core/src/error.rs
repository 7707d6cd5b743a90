//! Core error types

use thiserror::Error;

/// Errors raised while parsing a color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string did not start with `#`
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    /// The string had a digit count other than 3, 6, or 8
    #[error("color '{0}' must have 3, 6, or 8 hex digits")]
    InvalidLength(String),

    /// The string contained a non-hex character
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ColorParseError>;
