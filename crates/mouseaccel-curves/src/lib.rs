//! Acceleration curves for mouseaccel
//!
//! Turns the displacement of one sample and the time since the previous
//! sample into a unitless gain applied to both axes.
//!
//! # Overview
//!
//! - **Linear**: `rate * acceleration + 1`
//! - **Classic**: `(rate * acceleration + 1) ^ exponent`
//! - **Motivity**: `acceleration / (1 + e^(midpoint - rate))`
//! - **Passthrough**: the rate itself
//!
//! where `rate = min(|(dx, dy)|, speed_cap) / ms - offset`. A rate at or
//! below zero is returned as the gain unchanged, whatever the mode.
//!
//! # RT Safety
//!
//! [`gain()`] and the functions it calls are plain arithmetic: no
//! allocation, no dynamic dispatch, bounded time. [`GainTable`] allocates
//! and is meant for previews and tooling only.
//!
//! # Example
//!
//! ```
//! use mouseaccel_curves::gain;
//! use mouseaccel_params::{AccelerationMode, ParameterSet};
//!
//! let params = ParameterSet {
//!     mode: AccelerationMode::Linear,
//!     acceleration: 0.04,
//!     ..ParameterSet::default()
//! };
//!
//! // 6-8-10 triangle over 1 ms: rate 10
//! let g = gain(6.0, 8.0, 1.0, &params);
//! assert!((g - 1.4).abs() < 1e-5);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod gain;
pub mod prelude;
pub mod table;

pub use error::CurveError;
pub use gain::{apply_curve, gain, rate, speed};
pub use table::{GainPoint, GainTable};
