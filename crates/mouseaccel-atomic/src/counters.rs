//! Atomic counters for the per-sample cycle.
//!
//! All increments use `Ordering::Relaxed`. The counters are diagnostics,
//! not synchronization: readers see eventually consistent values and there
//! is no atomic snapshot across counters.

use core::sync::atomic::{AtomicU64, Ordering};

/// Counter snapshot returned by [`EngineCounters::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    /// Cycles that produced an output sample
    pub cycles_ok: u64,
    /// Samples buffered because the numeric context was unavailable
    pub context_unavailable: u64,
    /// Samples whose integer-to-float cast did not round-trip
    pub pre_validation_faults: u64,
    /// Cycles discarded because an output hit the sentinel integer
    pub post_validation_faults: u64,
    /// Parameter reloads applied
    pub reloads_applied: u64,
    /// Reload requests held back by the debounce window or a busy surface
    pub reloads_deferred: u64,
    /// Buffered samples merged back into a later cycle
    pub samples_merged: u64,
}

impl CounterSnapshot {
    /// Total number of `process` calls observed.
    #[must_use]
    pub fn total_cycles(&self) -> u64 {
        self.cycles_ok
            .saturating_add(self.context_unavailable)
            .saturating_add(self.pre_validation_faults)
            .saturating_add(self.post_validation_faults)
    }

    /// Numeric faults of either kind.
    #[must_use]
    pub fn numeric_faults(&self) -> u64 {
        self.pre_validation_faults
            .saturating_add(self.post_validation_faults)
    }

    /// Fraction of cycles that ended in a numeric fault.
    ///
    /// Returns 0.0 if no cycles have been recorded.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        reason = "diagnostic ratio, precision loss above 2^52 cycles is irrelevant"
    )]
    pub fn fault_rate(&self) -> f64 {
        let total = self.total_cycles();
        if total == 0 {
            return 0.0;
        }
        self.numeric_faults() as f64 / total as f64
    }
}

/// Atomic counters for the engine's cycle outcomes.
///
/// Shared between the engine (writer) and any diagnostics reader through an
/// `Arc`. Every `inc_*` method is a single atomic fetch-add.
///
/// # Example
///
/// ```rust
/// use mouseaccel_atomic::EngineCounters;
///
/// let counters = EngineCounters::new();
/// counters.inc_pre_validation_fault();
/// counters.inc_post_validation_fault();
///
/// let snapshot = counters.snapshot();
/// assert_eq!(snapshot.numeric_faults(), 2);
/// ```
#[derive(Debug)]
pub struct EngineCounters {
    cycles_ok: AtomicU64,
    context_unavailable: AtomicU64,
    pre_validation_faults: AtomicU64,
    post_validation_faults: AtomicU64,
    reloads_applied: AtomicU64,
    reloads_deferred: AtomicU64,
    samples_merged: AtomicU64,
}

impl Default for EngineCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineCounters {
    /// Create a new set of counters, all zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cycles_ok: AtomicU64::new(0),
            context_unavailable: AtomicU64::new(0),
            pre_validation_faults: AtomicU64::new(0),
            post_validation_faults: AtomicU64::new(0),
            reloads_applied: AtomicU64::new(0),
            reloads_deferred: AtomicU64::new(0),
            samples_merged: AtomicU64::new(0),
        }
    }

    /// Create counters seeded from a snapshot.
    #[must_use]
    pub fn with_values(snapshot: CounterSnapshot) -> Self {
        Self {
            cycles_ok: AtomicU64::new(snapshot.cycles_ok),
            context_unavailable: AtomicU64::new(snapshot.context_unavailable),
            pre_validation_faults: AtomicU64::new(snapshot.pre_validation_faults),
            post_validation_faults: AtomicU64::new(snapshot.post_validation_faults),
            reloads_applied: AtomicU64::new(snapshot.reloads_applied),
            reloads_deferred: AtomicU64::new(snapshot.reloads_deferred),
            samples_merged: AtomicU64::new(snapshot.samples_merged),
        }
    }

    /// Record a cycle that produced an output sample.
    #[inline]
    pub fn inc_cycle_ok(&self) {
        self.cycles_ok.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a sample buffered because the numeric context was unavailable.
    #[inline]
    pub fn inc_context_unavailable(&self) {
        self.context_unavailable.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed integer-to-float round trip.
    #[inline]
    pub fn inc_pre_validation_fault(&self) {
        self.pre_validation_faults.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cycle discarded by the sentinel check.
    #[inline]
    pub fn inc_post_validation_fault(&self) {
        self.post_validation_faults.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an applied parameter reload.
    #[inline]
    pub fn inc_reload_applied(&self) {
        self.reloads_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a reload request that could not be applied yet.
    #[inline]
    pub fn inc_reload_deferred(&self) {
        self.reloads_deferred.fetch_add(1, Ordering::Relaxed);
    }

    /// Record that a non-empty buffer was merged into a cycle.
    #[inline]
    pub fn inc_samples_merged(&self) {
        self.samples_merged.fetch_add(1, Ordering::Relaxed);
    }

    /// Read all counters without resetting them.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            cycles_ok: self.cycles_ok.load(Ordering::Relaxed),
            context_unavailable: self.context_unavailable.load(Ordering::Relaxed),
            pre_validation_faults: self.pre_validation_faults.load(Ordering::Relaxed),
            post_validation_faults: self.post_validation_faults.load(Ordering::Relaxed),
            reloads_applied: self.reloads_applied.load(Ordering::Relaxed),
            reloads_deferred: self.reloads_deferred.load(Ordering::Relaxed),
            samples_merged: self.samples_merged.load(Ordering::Relaxed),
        }
    }

    /// Read all counters and reset them to zero.
    ///
    /// Not meant for the hot path: it performs one swap per counter.
    #[inline]
    #[must_use]
    pub fn snapshot_and_reset(&self) -> CounterSnapshot {
        CounterSnapshot {
            cycles_ok: self.cycles_ok.swap(0, Ordering::Relaxed),
            context_unavailable: self.context_unavailable.swap(0, Ordering::Relaxed),
            pre_validation_faults: self.pre_validation_faults.swap(0, Ordering::Relaxed),
            post_validation_faults: self.post_validation_faults.swap(0, Ordering::Relaxed),
            reloads_applied: self.reloads_applied.swap(0, Ordering::Relaxed),
            reloads_deferred: self.reloads_deferred.swap(0, Ordering::Relaxed),
            samples_merged: self.samples_merged.swap(0, Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    #[inline]
    pub fn reset(&self) {
        self.cycles_ok.store(0, Ordering::Relaxed);
        self.context_unavailable.store(0, Ordering::Relaxed);
        self.pre_validation_faults.store(0, Ordering::Relaxed);
        self.post_validation_faults.store(0, Ordering::Relaxed);
        self.reloads_applied.store(0, Ordering::Relaxed);
        self.reloads_deferred.store(0, Ordering::Relaxed);
        self.samples_merged.store(0, Ordering::Relaxed);
    }
}
