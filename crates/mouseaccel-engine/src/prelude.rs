//! Prelude for the mouseaccel engine.
//!
//! ```
//! use mouseaccel_engine::prelude::*;
//! ```

pub use crate::buffer::EventAccumulator;
pub use crate::carry::{Carried, CarryState};
pub use crate::clock::{ManualClock, MonotonicClock, SystemClock};
pub use crate::context::{AlwaysAvailable, NumericContext, NumericSection, ScriptedContext};
pub use crate::engine::{AccelEngine, ProcessStatus};
pub use crate::frame_timer::FrameTimer;
pub use crate::sample::RawSample;

pub use mouseaccel_atomic::{CounterSnapshot, EngineCounters};
pub use mouseaccel_errors::{CycleError, CycleResult};
pub use mouseaccel_params::{
    AccelerationMode, ParamName, ParameterSet, ReloadOutcome, TunableSurface,
};
