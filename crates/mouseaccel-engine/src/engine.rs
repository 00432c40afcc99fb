//! The per-sample acceleration engine.

use std::sync::Arc;

use serde::Serialize;
use tracing::{trace, warn};

use mouseaccel_atomic::EngineCounters;
use mouseaccel_curves::gain;
use mouseaccel_errors::{CycleError, CycleResult, ErrorSeverity};
use mouseaccel_params::{
    FloatParser, ParameterSet, ReloadController, ReloadOutcome, StdFloatParser, TunableSurface,
};

use crate::buffer::EventAccumulator;
use crate::carry::CarryState;
use crate::clock::{MonotonicClock, SystemClock};
use crate::context::{AlwaysAvailable, NumericContext, NumericSection};
use crate::frame_timer::FrameTimer;
use crate::sample::RawSample;

/// Status code reported to the host for one processed sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// An output sample was produced.
    Ok,
    /// The sample was buffered for a later cycle.
    ContextUnavailable,
    /// The cycle was discarded.
    NumericFault,
}

impl ProcessStatus {
    /// Status of a [`AccelEngine::process`] result.
    pub fn of<T>(result: &CycleResult<T>) -> Self {
        match result {
            Ok(_) => ProcessStatus::Ok,
            Err(CycleError::ContextUnavailable) => ProcessStatus::ContextUnavailable,
            Err(CycleError::NumericFault) => ProcessStatus::NumericFault,
        }
    }

    /// Errno-style code: `0`, `-EBUSY` or `-EFAULT`.
    pub fn errno(self) -> i32 {
        match self {
            ProcessStatus::Ok => 0,
            ProcessStatus::ContextUnavailable => CycleError::ContextUnavailable.errno(),
            ProcessStatus::NumericFault => CycleError::NumericFault.errno(),
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ProcessStatus::Ok => "ok",
            ProcessStatus::ContextUnavailable => "unavailable",
            ProcessStatus::NumericFault => "fault",
        }
    }
}

/// Owns every piece of per-sample state.
///
/// `process` takes `&mut self`, so one engine handles one sample at a time.
/// Hosts that receive samples from several threads put the whole engine
/// behind one mutex.
///
/// Type parameters pick the collaborators: `C` supplies timestamps, `N`
/// decides whether float work may run, `P` parses surface strings.
#[derive(Debug)]
pub struct AccelEngine<
    C: MonotonicClock = SystemClock,
    N: NumericContext = AlwaysAvailable,
    P: FloatParser = StdFloatParser,
> {
    clock: C,
    context: N,
    params: ParameterSet,
    reload: ReloadController<P>,
    timer: FrameTimer,
    carry: CarryState,
    buffer: EventAccumulator,
    counters: Arc<EngineCounters>,
}

impl AccelEngine {
    /// Engine on the system clock with an always-available context.
    pub fn new(surface: Arc<TunableSurface>) -> Self {
        Self::with_parts(SystemClock::new(), AlwaysAvailable, surface)
    }
}

impl<C: MonotonicClock, N: NumericContext> AccelEngine<C, N, StdFloatParser> {
    /// Engine with explicit clock and context.
    pub fn with_parts(clock: C, context: N, surface: Arc<TunableSurface>) -> Self {
        Self::from_controller(clock, context, ReloadController::new(surface))
    }
}

impl<C: MonotonicClock, N: NumericContext, P: FloatParser> AccelEngine<C, N, P> {
    /// Engine around an existing reload controller.
    ///
    /// Starts from [`ParameterSet::default`], zero carry, an empty buffer and
    /// a fresh frame timer.
    pub fn from_controller(clock: C, context: N, reload: ReloadController<P>) -> Self {
        Self {
            clock,
            context,
            params: ParameterSet::default(),
            reload,
            timer: FrameTimer::new(),
            carry: CarryState::default(),
            buffer: EventAccumulator::new(),
            counters: Arc::new(EngineCounters::new()),
        }
    }

    /// Replace the starting parameter set.
    #[must_use]
    pub fn with_params(mut self, params: ParameterSet) -> Self {
        self.params = params;
        self
    }

    /// Report into shared counters.
    #[must_use]
    pub fn with_counters(mut self, counters: Arc<EngineCounters>) -> Self {
        self.counters = counters;
        self
    }

    /// Process one sample.
    ///
    /// Diagnostics for the cycle are logged after the numeric section has
    /// been released.
    ///
    /// # Errors
    ///
    /// - [`CycleError::ContextUnavailable`]: float work was not allowed. The
    ///   sample was added to the buffer; nothing else changed.
    /// - [`CycleError::NumericFault`]: either the sample failed the float
    ///   cast check (it was buffered, the buffer was kept), or the rounded
    ///   output hit the `i32::MIN` sentinel (the cycle was dropped and the
    ///   carry left alone).
    pub fn process(&mut self, sample: RawSample) -> CycleResult<RawSample> {
        let mut notes = CycleNotes::default();
        let result = self.run_cycle(sample, &mut notes);

        if let Some(outcome) = notes.reload {
            self.reload.log_outcome(outcome, &self.params);
        }
        if let Err(err) = result {
            log_failure(err, sample, notes.sentinel);
        }
        result
    }

    fn run_cycle(&mut self, sample: RawSample, notes: &mut CycleNotes) -> CycleResult<RawSample> {
        let Some(_section) = NumericSection::enter(&self.context) else {
            self.buffer.absorb(sample);
            self.counters.inc_context_unavailable();
            return Err(CycleError::ContextUnavailable);
        };

        if !sample.is_float_exact() {
            self.buffer.absorb(sample);
            self.counters.inc_pre_validation_fault();
            return Err(CycleError::NumericFault);
        }

        let pending = self.buffer.take();
        if !pending.is_empty() {
            self.counters.inc_samples_merged();
        }
        let (dx, dy, dwheel) = merge(sample, pending);

        let now_ns = self.clock.now_ns();
        let ms = self.timer.elapsed(now_ns);

        let outcome = self.reload.maybe_reload(now_ns, &mut self.params);
        match outcome {
            ReloadOutcome::Applied => self.counters.inc_reload_applied(),
            outcome if outcome.is_deferred() => self.counters.inc_reload_deferred(),
            _ => {}
        }
        notes.reload = Some(outcome);

        let g = gain(dx, dy, ms, &self.params);
        let carried = self.carry.apply(dx, dy, dwheel, g, &self.params);
        if carried.is_faulted() {
            self.counters.inc_post_validation_fault();
            notes.sentinel = Some(SentinelHit {
                output: carried.output(),
                gain: g,
                ms,
            });
            return Err(CycleError::NumericFault);
        }

        self.counters.inc_cycle_ok();
        Ok(carried.commit(&mut self.carry))
    }

    /// Live parameter set.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Surface that feeds reloads.
    pub fn surface(&self) -> &Arc<TunableSurface> {
        self.reload.surface()
    }

    /// Shared cycle counters.
    pub fn counters(&self) -> &Arc<EngineCounters> {
        &self.counters
    }

    /// Current fractional carry.
    pub fn carry(&self) -> CarryState {
        self.carry
    }

    /// Motion waiting for the next good cycle.
    pub fn buffered(&self) -> EventAccumulator {
        self.buffer
    }

    /// Frame timer state.
    pub fn frame_timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Earliest timestamp at which a reload will be accepted.
    pub fn next_reload_ns(&self) -> u64 {
        self.reload.next_allowed_ns()
    }
}

/// What a cycle saw inside the numeric section, logged once it is released.
#[derive(Clone, Copy, Debug, Default)]
struct CycleNotes {
    reload: Option<ReloadOutcome>,
    sentinel: Option<SentinelHit>,
}

#[derive(Clone, Copy, Debug)]
struct SentinelHit {
    output: RawSample,
    gain: f32,
    ms: f32,
}

fn log_failure(err: CycleError, sample: RawSample, sentinel: Option<SentinelHit>) {
    match (err.severity(), sentinel) {
        (ErrorSeverity::Info, _) => {
            trace!(?sample, %err, "numeric context unavailable, sample buffered");
        }
        (_, Some(hit)) => warn!(
            output = ?hit.output,
            gain = hit.gain,
            ms = hit.ms,
            "rounded output hit the fault sentinel, cycle discarded"
        ),
        (_, None) => warn!(?sample, %err, "sample does not survive a float cast, buffered"),
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "the merged sum is rounded to f32 once, as the scaled output is"
)]
#[inline]
fn merge(sample: RawSample, pending: EventAccumulator) -> (f32, f32, f32) {
    (
        sample.dx as f32 + pending.x as f32,
        sample.dy as f32 + pending.y as f32,
        sample.dwheel as f32 + pending.wheel as f32,
    )
}
