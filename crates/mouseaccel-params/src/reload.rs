//! Debounced parse-and-swap of the live parameter set.
//!
//! Reloading re-parses every surface string, and requests come from an
//! untrusted writer, so accepted reloads are spaced at least
//! [`RELOAD_INTERVAL_NS`] apart.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::parse::{FloatParser, StdFloatParser};
use crate::surface::TunableSurface;
use crate::types::{ParamName, ParameterSet};

/// Minimum spacing between two accepted reloads (1 s).
pub const RELOAD_INTERVAL_NS: u64 = 1_000_000_000;

/// What [`ReloadController::maybe_reload`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// No reload was requested.
    Idle,
    /// A reload is pending but the debounce window has not elapsed.
    Debounced,
    /// A reload is pending but a writer holds the surface.
    Contended,
    /// The live set was replaced.
    Applied,
}

impl ReloadOutcome {
    /// A request is still pending after this poll.
    pub fn is_deferred(self) -> bool {
        matches!(self, ReloadOutcome::Debounced | ReloadOutcome::Contended)
    }
}

/// Applies surface edits to the engine's live set.
///
/// Owned by the engine and polled once per processed sample with the
/// sample's monotonic timestamp.
///
/// Tie rule: a request polled exactly at the next allowed timestamp is
/// applied.
///
/// Polling never logs; callers report a poll with
/// [`log_outcome`](Self::log_outcome) once they are off the hot section.
#[derive(Debug)]
pub struct ReloadController<P: FloatParser = StdFloatParser> {
    surface: Arc<TunableSurface>,
    parser: P,
    next_allowed_ns: u64,
    rejected: [bool; ParamName::COUNT],
}

impl ReloadController<StdFloatParser> {
    /// Controller using the default float parser.
    pub fn new(surface: Arc<TunableSurface>) -> Self {
        Self::with_parser(surface, StdFloatParser)
    }
}

impl<P: FloatParser> ReloadController<P> {
    /// Controller using a custom float parser.
    pub fn with_parser(surface: Arc<TunableSurface>, parser: P) -> Self {
        Self {
            surface,
            parser,
            next_allowed_ns: 0,
            rejected: [false; ParamName::COUNT],
        }
    }

    /// The surface this controller reads.
    pub fn surface(&self) -> &Arc<TunableSurface> {
        &self.surface
    }

    /// Earliest timestamp at which the next reload will be accepted.
    pub fn next_allowed_ns(&self) -> u64 {
        self.next_allowed_ns
    }

    /// Fields whose string failed to parse in the last applied reload.
    pub fn rejected_fields(&self) -> impl Iterator<Item = ParamName> + '_ {
        ParamName::ALL
            .into_iter()
            .zip(self.rejected.iter())
            .filter_map(|(name, miss)| miss.then_some(name))
    }

    /// Apply a pending reload if the debounce window allows it.
    ///
    /// The request flag is consumed before the surface is read, so a writer
    /// that raises it again while the parse runs is seen on a later poll.
    /// On [`ReloadOutcome::Applied`] the window is pushed to `now_ns + 1 s`
    /// and `live` is overwritten in a single assignment. On every other
    /// outcome `live` is untouched and a pending request stays pending.
    /// Never blocks, allocates or logs.
    pub fn maybe_reload(&mut self, now_ns: u64, live: &mut ParameterSet) -> ReloadOutcome {
        if !self.surface.reload_requested() {
            return ReloadOutcome::Idle;
        }
        if now_ns < self.next_allowed_ns {
            return ReloadOutcome::Debounced;
        }
        if !self.surface.take_reload_request() {
            // Another poller consumed the request between the check and here.
            return ReloadOutcome::Idle;
        }
        let Some((next, rejected)) = self.surface.try_parse_onto(&self.parser, live) else {
            self.surface.request_reload();
            return ReloadOutcome::Contended;
        };
        self.next_allowed_ns = now_ns.saturating_add(RELOAD_INTERVAL_NS);
        self.rejected = rejected;
        *live = next;
        ReloadOutcome::Applied
    }

    /// Emit diagnostics for the result of the last [`maybe_reload`](Self::maybe_reload).
    ///
    /// `live` is the set that poll produced. Only an applied reload logs.
    pub fn log_outcome(&self, outcome: ReloadOutcome, live: &ParameterSet) {
        if outcome != ReloadOutcome::Applied {
            return;
        }
        for name in self.rejected_fields() {
            warn!(
                param = name.key(),
                kept = live.get(name),
                "unparsable parameter value, keeping previous"
            );
        }
        debug!(
            mode = %live.mode,
            sensitivity = live.sensitivity,
            acceleration = live.acceleration,
            next_allowed_ns = self.next_allowed_ns,
            "parameters reloaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::AccelerationMode;

    const SECOND: u64 = RELOAD_INTERVAL_NS;

    fn setup() -> (Arc<TunableSurface>, ReloadController, ParameterSet) {
        let surface = Arc::new(TunableSurface::new());
        let controller = ReloadController::new(Arc::clone(&surface));
        (surface, controller, ParameterSet::default())
    }

    #[test]
    fn test_idle_without_request() {
        let (surface, mut controller, mut live) = setup();
        surface.set(ParamName::Sensitivity, "5");
        assert_eq!(controller.maybe_reload(10, &mut live), ReloadOutcome::Idle);
        assert_eq!(live, ParameterSet::default());
    }

    #[test]
    fn test_applies_and_clears_flag() {
        let (surface, mut controller, mut live) = setup();
        surface.set(ParamName::Offset, "1.5");
        surface.set_mode(3);
        surface.request_reload();

        assert_eq!(
            controller.maybe_reload(5 * SECOND, &mut live),
            ReloadOutcome::Applied
        );
        assert!((live.offset - 1.5).abs() < 1e-6);
        assert_eq!(live.mode, AccelerationMode::Motivity);
        assert!(!surface.reload_requested());
        assert_eq!(controller.next_allowed_ns(), 6 * SECOND);
    }

    #[test]
    fn test_second_request_within_window_is_debounced() {
        let (surface, mut controller, mut live) = setup();
        surface.set(ParamName::Sensitivity, "2");
        surface.request_reload();
        assert_eq!(controller.maybe_reload(SECOND, &mut live), ReloadOutcome::Applied);

        surface.set(ParamName::Sensitivity, "3");
        surface.request_reload();
        assert_eq!(
            controller.maybe_reload(SECOND + SECOND / 2, &mut live),
            ReloadOutcome::Debounced
        );
        assert!((live.sensitivity - 2.0).abs() < 1e-6);
        assert!(surface.reload_requested());
    }

    #[test]
    fn test_boundary_applies() {
        let (surface, mut controller, mut live) = setup();
        surface.request_reload();
        assert_eq!(controller.maybe_reload(SECOND, &mut live), ReloadOutcome::Applied);

        surface.set(ParamName::Sensitivity, "4");
        surface.request_reload();
        assert_eq!(
            controller.maybe_reload(2 * SECOND - 1, &mut live),
            ReloadOutcome::Debounced
        );
        assert_eq!(
            controller.maybe_reload(2 * SECOND, &mut live),
            ReloadOutcome::Applied
        );
        assert!((live.sensitivity - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_contended_surface_defers() {
        let (surface, mut controller, mut live) = setup();
        surface.request_reload();
        {
            let _held = surface.lock_values();
            assert_eq!(controller.maybe_reload(0, &mut live), ReloadOutcome::Contended);
        }
        assert!(surface.reload_requested());
        assert_eq!(controller.maybe_reload(0, &mut live), ReloadOutcome::Applied);
    }

    #[test]
    fn test_custom_parser() {
        struct Doubling;
        impl FloatParser for Doubling {
            fn parse(&self, raw: &str) -> Option<f32> {
                raw.trim().parse::<f32>().ok().map(|v| v * 2.0)
            }
        }

        let surface = Arc::new(TunableSurface::new());
        let mut controller = ReloadController::with_parser(Arc::clone(&surface), Doubling);
        let mut live = ParameterSet::default();
        surface.set(ParamName::Midpoint, "3");
        surface.request_reload();
        assert_eq!(controller.maybe_reload(0, &mut live), ReloadOutcome::Applied);
        assert!((live.midpoint - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_request_raised_during_parse_survives() {
        struct Rerequesting(Arc<TunableSurface>);
        impl FloatParser for Rerequesting {
            fn parse(&self, raw: &str) -> Option<f32> {
                self.0.request_reload();
                StdFloatParser.parse(raw)
            }
        }

        let surface = Arc::new(TunableSurface::new());
        let parser = Rerequesting(Arc::clone(&surface));
        let mut controller = ReloadController::with_parser(Arc::clone(&surface), parser);
        let mut live = ParameterSet::default();
        surface.set(ParamName::Sensitivity, "2");
        surface.request_reload();

        assert_eq!(controller.maybe_reload(SECOND, &mut live), ReloadOutcome::Applied);
        assert!(surface.reload_requested());

        surface.set(ParamName::Sensitivity, "3");
        assert_eq!(
            controller.maybe_reload(2 * SECOND, &mut live),
            ReloadOutcome::Applied
        );
        assert!((live.sensitivity - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejected_fields_are_recorded() {
        let (surface, mut controller, mut live) = setup();
        surface.set(ParamName::Offset, "two");
        surface.set(ParamName::SpeedCap, "");
        surface.set(ParamName::Sensitivity, "1.25");
        surface.request_reload();

        let outcome = controller.maybe_reload(0, &mut live);
        assert_eq!(outcome, ReloadOutcome::Applied);
        let rejected: Vec<ParamName> = controller.rejected_fields().collect();
        assert_eq!(rejected, vec![ParamName::SpeedCap, ParamName::Offset]);
        assert!((live.sensitivity - 1.25).abs() < 1e-6);
        controller.log_outcome(outcome, &live);

        surface.set(ParamName::Offset, "0");
        surface.set(ParamName::SpeedCap, "0");
        surface.request_reload();
        assert_eq!(controller.maybe_reload(SECOND, &mut live), ReloadOutcome::Applied);
        assert_eq!(controller.rejected_fields().count(), 0);
    }

    #[test]
    fn test_outcome_is_deferred() {
        assert!(ReloadOutcome::Debounced.is_deferred());
        assert!(ReloadOutcome::Contended.is_deferred());
        assert!(!ReloadOutcome::Applied.is_deferred());
        assert!(!ReloadOutcome::Idle.is_deferred());
    }
}
