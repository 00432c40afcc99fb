//! Prelude for the params crate.

pub use crate::defaults;
pub use crate::mode::AccelerationMode;
pub use crate::parse::{FloatParser, StdFloatParser};
pub use crate::reload::{RELOAD_INTERVAL_NS, ReloadController, ReloadOutcome};
pub use crate::surface::TunableSurface;
pub use crate::types::{ParamName, ParameterSet};
