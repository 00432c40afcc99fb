//! Prelude for the curves crate.

pub use crate::error::CurveError;
pub use crate::gain::{apply_curve, gain, rate, speed};
pub use crate::table::{GainPoint, GainTable};
pub use mouseaccel_params::{AccelerationMode, ParameterSet};
