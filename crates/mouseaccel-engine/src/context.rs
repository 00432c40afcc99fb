//! Numeric execution context guard.
//!
//! Floating-point work on the sample path may only run while the platform
//! says the float unit is usable. [`NumericSection`] brackets that work: it
//! checks availability once, calls [`NumericContext::begin`] on entry and
//! [`NumericContext::end`] when dropped, so every return path releases the
//! context exactly once.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Platform hook deciding whether float work may run right now.
///
/// `begin` and `end` must be cheap and must not block.
pub trait NumericContext {
    /// Whether float work is allowed for this sample.
    fn is_usable(&self) -> bool;

    /// Enter the numeric section.
    fn begin(&self);

    /// Leave the numeric section.
    fn end(&self);
}

/// RAII guard over a [`NumericContext`].
#[must_use = "the context is released as soon as the section is dropped"]
#[derive(Debug)]
pub struct NumericSection<'a, C: NumericContext + ?Sized> {
    context: &'a C,
}

impl<'a, C: NumericContext + ?Sized> NumericSection<'a, C> {
    /// Enter the section if the context is usable.
    ///
    /// Returns `None` without calling `begin` otherwise.
    #[inline]
    pub fn enter(context: &'a C) -> Option<Self> {
        if !context.is_usable() {
            return None;
        }
        context.begin();
        Some(Self { context })
    }
}

impl<C: NumericContext + ?Sized> Drop for NumericSection<'_, C> {
    #[inline]
    fn drop(&mut self) {
        self.context.end();
    }
}

/// Context for hosts where float work is always allowed (user space).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAvailable;

impl NumericContext for AlwaysAvailable {
    #[inline]
    fn is_usable(&self) -> bool {
        true
    }

    #[inline]
    fn begin(&self) {}

    #[inline]
    fn end(&self) {}
}

#[derive(Debug)]
struct ScriptedState {
    usable: AtomicBool,
    begins: AtomicU64,
    ends: AtomicU64,
}

/// Context whose availability is switched from outside, and which counts
/// entries and exits.
///
/// Clones share state. Used by replays and tests.
///
/// ```
/// use mouseaccel_engine::{NumericSection, ScriptedContext};
///
/// let ctx = ScriptedContext::new(true);
/// {
///     let _section = NumericSection::enter(&ctx);
/// }
/// ctx.set_usable(false);
/// assert!(NumericSection::enter(&ctx).is_none());
/// assert_eq!((ctx.begins(), ctx.ends()), (1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedContext {
    state: Arc<ScriptedState>,
}

impl ScriptedContext {
    /// Context starting in the given availability.
    pub fn new(usable: bool) -> Self {
        Self {
            state: Arc::new(ScriptedState {
                usable: AtomicBool::new(usable),
                begins: AtomicU64::new(0),
                ends: AtomicU64::new(0),
            }),
        }
    }

    /// Switch availability for subsequent samples.
    pub fn set_usable(&self, usable: bool) {
        self.state.usable.store(usable, Ordering::Relaxed);
    }

    /// Number of `begin` calls so far.
    pub fn begins(&self) -> u64 {
        self.state.begins.load(Ordering::Relaxed)
    }

    /// Number of `end` calls so far.
    pub fn ends(&self) -> u64 {
        self.state.ends.load(Ordering::Relaxed)
    }

    /// Whether the section is currently entered.
    pub fn is_entered(&self) -> bool {
        self.begins() != self.ends()
    }
}

impl Default for ScriptedContext {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NumericContext for ScriptedContext {
    fn is_usable(&self) -> bool {
        self.state.usable.load(Ordering::Relaxed)
    }

    fn begin(&self) {
        self.state.begins.fetch_add(1, Ordering::Relaxed);
    }

    fn end(&self) {
        self.state.ends.fetch_add(1, Ordering::Relaxed);
    }
}
