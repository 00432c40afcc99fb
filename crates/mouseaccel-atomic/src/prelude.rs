//! Prelude for mouseaccel-atomic.

pub use crate::counters::{CounterSnapshot, EngineCounters};
