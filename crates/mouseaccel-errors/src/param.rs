//! Parameter surface and configuration errors.

use crate::validation::ValidationError;

/// Errors raised while editing the tunable surface or loading a parameter file.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    /// The key does not name a tunable
    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),

    /// The string could not be parsed as a float
    #[error("Parameter '{name}' has unparsable value '{value}'")]
    Unparsable {
        /// Parameter name
        name: &'static str,
        /// The raw string
        value: String,
    },

    /// File extension is not one of the supported formats
    #[error("Unsupported parameter file format: {0}")]
    UnsupportedFormat(String),

    /// JSON decode failure
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML decode failure
    #[error("YAML error: {0}")]
    Yaml(String),

    /// The decoded set failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// I/O error while reading a parameter file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParamError {
    /// Create an unparsable-value error.
    pub fn unparsable(name: &'static str, value: impl Into<String>) -> Self {
        ParamError::Unparsable {
            name,
            value: value.into(),
        }
    }
}
