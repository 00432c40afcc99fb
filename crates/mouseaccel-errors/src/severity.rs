//! Error severity classification.

use core::fmt;

/// Error severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, expected under normal operation
    Info = 0,
    /// Something unusual happened but was recovered locally
    Warning = 1,
    /// An operation failed
    Error = 2,
    /// The component cannot continue
    Critical = 3,
}

impl ErrorSeverity {
    /// Check if an error of this severity leaves the engine usable.
    pub fn is_recoverable(self) -> bool {
        self < ErrorSeverity::Critical
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
    }

    #[test]
    fn test_only_critical_is_unrecoverable() {
        assert!(ErrorSeverity::Warning.is_recoverable());
        assert!(ErrorSeverity::Error.is_recoverable());
        assert!(!ErrorSeverity::Critical.is_recoverable());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }
}
