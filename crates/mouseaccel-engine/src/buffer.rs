//! Motion held back while no cycle could run.

use crate::sample::RawSample;

/// Integer sums of samples that did not produce output.
///
/// Kept in `i64` so a long run of rejected samples cannot overflow. Drained
/// in full by the next cycle that passes the float cast check.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventAccumulator {
    /// Pending horizontal motion
    pub x: i64,
    /// Pending vertical motion
    pub y: i64,
    /// Pending wheel ticks
    pub wheel: i64,
}

impl EventAccumulator {
    /// Empty buffer.
    pub const fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            wheel: 0,
        }
    }

    /// Add a sample to the pending sums.
    #[inline]
    pub fn absorb(&mut self, sample: RawSample) {
        self.x = self.x.saturating_add(i64::from(sample.dx));
        self.y = self.y.saturating_add(i64::from(sample.dy));
        self.wheel = self.wheel.saturating_add(i64::from(sample.dwheel));
    }

    /// Whether nothing is pending.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x == 0 && self.y == 0 && self.wheel == 0
    }

    /// Return the pending sums and zero the buffer.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}
