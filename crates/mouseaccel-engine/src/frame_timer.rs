//! Inter-sample frame time.

/// Shortest frame time accepted as a fresh measurement, in milliseconds.
pub const MIN_FRAME_MS: f32 = 1.0;

/// Longest frame time used for rate computation, in milliseconds.
pub const MAX_FRAME_MS: f32 = 100.0;

/// Measures the time between consecutive samples.
///
/// A measurement under [`MIN_FRAME_MS`] is too noisy to divide by, so the
/// previous accepted value is reused. Anything over [`MAX_FRAME_MS`] is
/// clamped, which makes the first motion after a pause behave like slow
/// motion. The previous timestamp starts at zero and the fallback at 1 ms.
///
/// ```
/// use mouseaccel_engine::FrameTimer;
///
/// let mut timer = FrameTimer::new();
/// assert_eq!(timer.elapsed(4_000_000_000), 100.0);
/// assert_eq!(timer.elapsed(4_008_000_000), 8.0);
/// assert_eq!(timer.elapsed(4_008_500_000), 8.0);
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTimer {
    last_ns: u64,
    last_ms: f32,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Timer with no previous sample.
    pub const fn new() -> Self {
        Self {
            last_ns: 0,
            last_ms: MIN_FRAME_MS,
        }
    }

    /// Frame time in milliseconds for a sample arriving at `now_ns`.
    ///
    /// Always in `[MIN_FRAME_MS, MAX_FRAME_MS]`. A clock that went backwards
    /// reads as zero elapsed time.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        reason = "sub-nanosecond precision is irrelevant at millisecond scale"
    )]
    #[inline]
    pub fn elapsed(&mut self, now_ns: u64) -> f32 {
        let delta_ns = now_ns.saturating_sub(self.last_ns);
        self.last_ns = now_ns;

        let ms = (delta_ns as f64 / 1_000_000.0) as f32;
        if ms < MIN_FRAME_MS {
            return self.last_ms;
        }
        let ms = ms.min(MAX_FRAME_MS);
        self.last_ms = ms;
        ms
    }

    /// Timestamp of the previous sample.
    pub fn last_ns(&self) -> u64 {
        self.last_ns
    }

    /// Last accepted frame time.
    pub fn last_ms(&self) -> f32 {
        self.last_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const MS: u64 = 1_000_000;

    #[test]
    fn test_first_sample_after_long_uptime_is_clamped() {
        let mut timer = FrameTimer::new();
        assert_abs_diff_eq!(timer.elapsed(3_600_000 * MS), MAX_FRAME_MS);
    }

    #[test]
    fn test_first_sample_near_origin_uses_initial_fallback() {
        let mut timer = FrameTimer::new();
        assert_abs_diff_eq!(timer.elapsed(MS / 4), 1.0);
    }

    #[test]
    fn test_short_frame_reuses_previous() {
        let mut timer = FrameTimer::new();
        timer.elapsed(1_000 * MS);
        assert_abs_diff_eq!(timer.elapsed(1_005 * MS), 5.0);
        assert_abs_diff_eq!(timer.elapsed(1_005 * MS + MS / 2), 5.0);
        // the short frame still moved the reference point
        assert_eq!(timer.last_ns(), 1_005 * MS + MS / 2);
    }

    #[test]
    fn test_long_frame_clamps() {
        let mut timer = FrameTimer::new();
        timer.elapsed(1_000 * MS);
        assert_abs_diff_eq!(timer.elapsed(1_150 * MS), 100.0);
        assert_abs_diff_eq!(timer.last_ms(), 100.0);
    }

    #[test]
    fn test_fractional_milliseconds_are_kept() {
        let mut timer = FrameTimer::new();
        timer.elapsed(1_000 * MS);
        assert_abs_diff_eq!(timer.elapsed(1_000 * MS + 2_500_000), 2.5, epsilon = 1e-6);
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut timer = FrameTimer::new();
        timer.elapsed(1_000 * MS);
        timer.elapsed(1_004 * MS);
        assert_abs_diff_eq!(timer.elapsed(990 * MS), 4.0);
        assert_eq!(timer.last_ns(), 990 * MS);
    }
}
