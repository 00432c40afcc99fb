//! Per-sample pointer acceleration engine
//!
//! [`AccelEngine`] turns each raw relative motion sample into an accelerated
//! one. A cycle runs in this order:
//!
//! 1. enter the numeric section, or buffer the sample and bail out
//! 2. check that every integer field survives a cast to `f32`
//! 3. merge buffered leftovers and clear the buffer
//! 4. measure the frame time
//! 5. apply a pending parameter reload, if the debounce window allows
//! 6. compute the gain for the merged displacement
//! 7. scale, add the fractional carry, round
//! 8. reject sentinel results, otherwise commit the new carry
//!
//! # RT Safety
//!
//! While the numeric section is held, [`AccelEngine::process`] does not
//! allocate, block, log or perform I/O. The tunable surface is only ever
//! `try_lock`ed there, and clock, context and parser collaborators are
//! generic parameters. `tracing` events for the cycle are emitted after the
//! section is released, so their cost depends on the host's subscriber.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use mouseaccel_engine::prelude::*;
//!
//! let clock = ManualClock::new();
//! let surface = Arc::new(TunableSurface::new());
//! let mut engine = AccelEngine::with_parts(clock.clone(), AlwaysAvailable, surface);
//!
//! clock.advance_ms(8);
//! let out = engine.process(RawSample::new(3, -2, 0))?;
//! assert_eq!(ProcessStatus::of(&Ok(out)), ProcessStatus::Ok);
//! # Ok::<(), mouseaccel_engine::CycleError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod buffer;
pub mod carry;
pub mod clock;
pub mod context;
pub mod engine;
pub mod frame_timer;
pub mod prelude;
pub mod sample;

pub use buffer::EventAccumulator;
pub use carry::{Carried, CarryState};
pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use context::{AlwaysAvailable, NumericContext, NumericSection, ScriptedContext};
pub use engine::{AccelEngine, ProcessStatus};
pub use frame_timer::{FrameTimer, MAX_FRAME_MS, MIN_FRAME_MS};
pub use sample::RawSample;

pub use mouseaccel_errors::{CycleError, CycleResult};
