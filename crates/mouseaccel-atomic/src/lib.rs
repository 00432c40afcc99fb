//! # mouseaccel-atomic
//!
//! Lock-free counters describing what happened to each processed sample.
//!
//! The engine increments these from its hot path, which may run in an
//! interrupt-like context, so every increment is a single relaxed atomic
//! add: no allocation, no blocking, no syscalls.
//!
//! ```rust
//! use mouseaccel_atomic::EngineCounters;
//!
//! let counters = EngineCounters::new();
//! counters.inc_cycle_ok();
//! counters.inc_context_unavailable();
//!
//! let snapshot = counters.snapshot();
//! assert_eq!(snapshot.total_cycles(), 2);
//! ```

#![no_std]
#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod counters;
pub mod prelude;

pub use counters::{CounterSnapshot, EngineCounters};
