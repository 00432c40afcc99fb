//! Compiled-in defaults for every tunable.

use crate::mode::AccelerationMode;

/// Lines scrolled per wheel tick.
pub const SCROLLS_PER_TICK: f32 = 3.0;

/// Wheel ticks are rescaled relative to this reference tick size.
pub const REFERENCE_SCROLLS_PER_TICK: f32 = 3.0;

/// Final output multiplier.
pub const SENSITIVITY: f32 = 1.0;

/// Curve slope.
pub const ACCELERATION: f32 = 0.04;

/// Sensitivity cap.
pub const SENSITIVITY_CAP: f32 = 2.2;

/// Rate subtracted before the curve is applied.
pub const OFFSET: f32 = 0.0;

/// Displacement cap per sample; `0` disables it.
pub const SPEED_CAP: f32 = 0.0;

/// Sigmoid midpoint for [`AccelerationMode::Motivity`].
pub const MIDPOINT: f32 = 1.0;

/// Exponent for [`AccelerationMode::Classic`].
pub const EXPONENT: f32 = 0.0;

/// Curve selected at startup.
pub const ACCELERATION_MODE: AccelerationMode = AccelerationMode::Linear;
