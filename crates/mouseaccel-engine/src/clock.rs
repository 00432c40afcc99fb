//! Monotonic timestamp sources.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Source of monotonic nanosecond timestamps.
///
/// Read once per processed sample. Implementations must not block.
pub trait MonotonicClock {
    /// Nanoseconds since an arbitrary fixed origin.
    fn now_ns(&self) -> u64;
}

/// Wall clock backed by [`Instant`], counted from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    #[inline]
    fn now_ns(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock for replays and tests.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to an engine.
///
/// ```
/// use mouseaccel_engine::{ManualClock, MonotonicClock};
///
/// let clock = ManualClock::new();
/// let engine_side = clock.clone();
/// clock.advance_ms(5);
/// assert_eq!(engine_side.now_ns(), 5_000_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock at `ns`.
    pub fn at_ns(ns: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(ns)),
        }
    }

    /// Jump to an absolute time. Going backwards is allowed.
    pub fn set_ns(&self, ns: u64) {
        self.now.store(ns, Ordering::Relaxed);
    }

    /// Move forward by `ns`, saturating at `u64::MAX`.
    pub fn advance_ns(&self, ns: u64) {
        let current = self.now.load(Ordering::Relaxed);
        self.now.store(current.saturating_add(ns), Ordering::Relaxed);
    }

    /// Move forward by `us` microseconds.
    pub fn advance_us(&self, us: u64) {
        self.advance_ns(us.saturating_mul(1_000));
    }

    /// Move forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance_ns(ms.saturating_mul(1_000_000));
    }
}

impl MonotonicClock for ManualClock {
    #[inline]
    fn now_ns(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}
