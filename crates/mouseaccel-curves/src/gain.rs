//! Rate and gain evaluation.

use mouseaccel_params::{AccelerationMode, ParameterSet};

/// Distance travelled in one sample, capped at `speed_cap` when the cap is
/// non-zero.
#[inline]
pub fn speed(dx: f32, dy: f32, speed_cap: f32) -> f32 {
    let raw = (dx * dx + dy * dy).sqrt();
    if speed_cap != 0.0 && raw >= speed_cap {
        speed_cap
    } else {
        raw
    }
}

/// Speed per millisecond minus the configured offset.
#[inline]
pub fn rate(dx: f32, dy: f32, ms: f32, params: &ParameterSet) -> f32 {
    speed(dx, dy, params.speed_cap) / ms - params.offset
}

/// Evaluate the selected curve at a positive rate.
///
/// Callers are expected to have handled `rate <= 0` already; see [`gain()`].
#[inline]
pub fn apply_curve(rate: f32, params: &ParameterSet) -> f32 {
    match params.mode {
        AccelerationMode::Linear => rate * params.acceleration + 1.0,
        AccelerationMode::Classic => (rate * params.acceleration + 1.0).powf(params.exponent),
        AccelerationMode::Motivity => {
            params.acceleration / (1.0 + (params.midpoint - rate).exp())
        }
        AccelerationMode::Passthrough => rate,
    }
}

/// Gain for one sample.
///
/// `ms` is the clamped frame time. When the rate is at or below zero (motion
/// slower than `offset`), the rate is returned as the gain without applying
/// any curve. That value can be below one, zero, or negative; it is kept
/// as-is on purpose.
///
/// # Example
///
/// ```
/// use mouseaccel_curves::gain;
/// use mouseaccel_params::ParameterSet;
///
/// let params = ParameterSet { offset: 5.0, ..ParameterSet::default() };
/// // rate = 3 / 1 - 5 = -2
/// assert!((gain(3.0, 0.0, 1.0, &params) + 2.0).abs() < 1e-6);
/// ```
#[inline]
pub fn gain(dx: f32, dy: f32, ms: f32, params: &ParameterSet) -> f32 {
    let rate = rate(dx, dy, ms, params);
    if rate <= 0.0 {
        return rate;
    }
    apply_curve(rate, params)
}
