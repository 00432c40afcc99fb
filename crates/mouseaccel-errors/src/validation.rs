//! Parameter validation errors.

/// Validation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Value is NaN or infinite
    #[error("{field} must be finite")]
    NonFinite {
        /// Field name
        field: &'static str,
    },

    /// Value must not be negative
    #[error("{field} must be >= 0, got {value}")]
    Negative {
        /// Field name
        field: &'static str,
        /// The invalid value
        value: f32,
    },

    /// Value out of range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// The invalid value
        value: f32,
        /// Minimum allowed value
        min: f32,
        /// Maximum allowed value
        max: f32,
    },
}

impl ValidationError {
    /// Create a non-finite error.
    pub fn non_finite(field: &'static str) -> Self {
        ValidationError::NonFinite { field }
    }

    /// Create a negative-value error.
    pub fn negative(field: &'static str, value: f32) -> Self {
        ValidationError::Negative { field, value }
    }

    /// Create an out of range error.
    pub fn out_of_range(field: &'static str, value: f32, min: f32, max: f32) -> Self {
        ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}
