//! Per-sample processing errors.
//!
//! These errors are returned from the hot path:
//! - `Copy` semantics, no heap allocation
//! - Fixed `#[repr(u8)]` representation
//! - Errno-style codes matching what a kernel input hook reports

use core::fmt;

use crate::severity::ErrorSeverity;

/// `EBUSY`: the numeric context was not usable for this sample.
pub const EBUSY: i32 = 16;

/// `EFAULT`: a floating-point trap fired during the cycle.
pub const EFAULT: i32 = 14;

/// Why a processing cycle did not produce an output sample.
///
/// Neither variant is fatal. An unavailable context or a sample that fails
/// the float cast check is kept in the engine's event buffer and merged into
/// the next good cycle. A fault after rounding drops that cycle's motion and
/// leaves the carry as it was.
///
/// # Examples
///
/// ```
/// use mouseaccel_errors::{CycleError, ErrorSeverity};
///
/// let err = CycleError::ContextUnavailable;
/// assert_eq!(err.code(), 1);
/// assert_eq!(err.errno(), -16);
/// assert_eq!(err.severity(), ErrorSeverity::Info);
/// assert!(err.is_recoverable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CycleError {
    /// Floating-point execution was not permitted; the sample was buffered.
    ContextUnavailable = 1,
    /// A float cast or the rounded result was corrupted; the cycle was discarded.
    NumericFault = 2,
}

impl CycleError {
    /// Get the numeric error code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Negative errno value reported to the caller of the input hook.
    pub fn errno(self) -> i32 {
        match self {
            CycleError::ContextUnavailable => -EBUSY,
            CycleError::NumericFault => -EFAULT,
        }
    }

    /// Get the error severity.
    ///
    /// Unavailability is expected under load; a numeric fault indicates a
    /// platform problem and is worth a diagnostic.
    pub fn severity(self) -> ErrorSeverity {
        match self {
            CycleError::ContextUnavailable => ErrorSeverity::Info,
            CycleError::NumericFault => ErrorSeverity::Warning,
        }
    }

    /// Every cycle error is recovered on the next sample.
    pub fn is_recoverable(self) -> bool {
        self.severity().is_recoverable()
    }

    /// Create an error from a code.
    ///
    /// Returns `None` if the code does not correspond to a known error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mouseaccel_errors::CycleError;
    ///
    /// assert_eq!(CycleError::from_code(2), Some(CycleError::NumericFault));
    /// assert_eq!(CycleError::from_code(0), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(CycleError::ContextUnavailable),
            2 => Some(CycleError::NumericFault),
            _ => None,
        }
    }
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleError::ContextUnavailable => write!(f, "Numeric context unavailable"),
            CycleError::NumericFault => write!(f, "Floating-point fault trapped"),
        }
    }
}

impl std::error::Error for CycleError {}
