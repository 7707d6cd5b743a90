//! Slider error types
//!
//! Only configuration loading and opt-in validation can fail. Layout,
//! gesture, and animation paths never return errors.

use glide_core::ColorParseError;
use thiserror::Error;

/// Slider configuration errors
#[derive(Error, Debug)]
pub enum SliderError {
    /// The configuration document could not be parsed
    #[error("Invalid slider configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// `maximum_value` must be strictly greater than `minimum_value`
    #[error("Invalid range: maximum {max} must exceed minimum {min}")]
    InvalidRange { min: f32, max: f32 },

    /// `step` must lie in `0..=(maximum_value - minimum_value)`
    #[error("Invalid step {step}: must be between 0 and {span}")]
    InvalidStep { step: f32, span: f32 },

    /// A color string could not be parsed
    #[error("Invalid color: {0}")]
    Color(#[from] ColorParseError),
}

/// Result type for slider operations
pub type Result<T> = std::result::Result<T, SliderError>;
