//! Relative motion samples.

use serde::{Deserialize, Serialize};

/// One relative motion report: pointer deltas plus wheel ticks.
///
/// The engine consumes a sample and returns a new one of the same shape.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSample {
    /// Horizontal displacement
    pub dx: i32,
    /// Vertical displacement
    pub dy: i32,
    /// Wheel ticks
    pub dwheel: i32,
}

impl RawSample {
    /// Build a sample.
    #[inline]
    pub const fn new(dx: i32, dy: i32, dwheel: i32) -> Self {
        Self { dx, dy, dwheel }
    }

    /// Whether every field is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0 && self.dwheel == 0
    }

    /// Whether every field converts to `f32` and truncates back to itself.
    ///
    /// Values beyond 2^24 in magnitude lose precision in `f32`; a mismatch
    /// also catches a corrupted float unit.
    #[inline]
    pub fn is_float_exact(&self) -> bool {
        [self.dx, self.dy, self.dwheel].iter().all(|&v| float_round_trips(v))
    }

    /// Whether any field equals the `i32::MIN` fault sentinel.
    #[inline]
    pub const fn has_sentinel(&self) -> bool {
        self.dx == i32::MIN || self.dy == i32::MIN || self.dwheel == i32::MIN
    }
}

// Compared as i64: `as i32` saturates, so i32::MAX would round up to 2^31
// and clamp back to itself.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "the lossy round trip is the check"
)]
#[inline]
fn float_round_trips(v: i32) -> bool {
    (v as f32) as i64 == i64::from(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_round_trip() {
        assert!(RawSample::new(0, -1, 1).is_float_exact());
        assert!(RawSample::new(16_777_216, -16_777_216, 3).is_float_exact());
    }

    #[test]
    fn test_large_odd_values_do_not_round_trip() {
        assert!(!RawSample::new(16_777_217, 0, 0).is_float_exact());
        assert!(!RawSample::new(0, 0, -16_777_219).is_float_exact());
    }

    #[test]
    fn test_saturating_extremes() {
        assert!(!RawSample::new(i32::MAX, 0, 0).is_float_exact());
        assert!(!RawSample::new(0, i32::MAX - 1, 0).is_float_exact());
        assert!(RawSample::new(0, 0, i32::MIN).is_float_exact());
    }

    #[test]
    fn test_sentinel() {
        assert!(RawSample::new(0, i32::MIN, 0).has_sentinel());
        assert!(!RawSample::new(i32::MAX, 0, 0).has_sentinel());
        assert!(RawSample::default().is_zero());
    }
}
