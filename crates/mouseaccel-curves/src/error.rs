//! Error types for curve tooling.

/// Errors from building a [`crate::GainTable`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// The rate range is empty, reversed or not finite.
    #[error("Invalid rate range [{from}, {to}]")]
    InvalidRange {
        /// Range start
        from: f32,
        /// Range end
        to: f32,
    },
    /// A table needs at least two points.
    #[error("Gain table needs at least 2 steps, got {0}")]
    TooFewSteps(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::InvalidRange { from: 5.0, to: 1.0 };
        assert_eq!(err.to_string(), "Invalid rate range [5, 1]");
        assert!(CurveError::TooFewSteps(1).to_string().contains("got 1"));
    }
}
