//! Sub-unit remainder carried between samples.

use mouseaccel_params::ParameterSet;

use crate::sample::RawSample;

/// Lower bound of the `i32` range as an exactly representable `f32`.
const I32_MIN_F32: f32 = -2_147_483_648.0;

/// First `f32` above the `i32` range.
const I32_END_F32: f32 = 2_147_483_648.0;

/// Fractional motion not yet emitted.
///
/// Adding the carry before rounding means that, summed over any run of
/// successful cycles, output equals scaled input to within one unit per
/// axis.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarryState {
    /// Horizontal remainder
    pub x: f32,
    /// Vertical remainder
    pub y: f32,
    /// Wheel remainder. Recorded after each cycle but not added back.
    pub wheel: f32,
}

/// Rounded output of a cycle plus the remainder it would leave behind.
///
/// Nothing is written to the engine until [`Carried::commit`] runs.
#[must_use = "the carry only advances when the result is committed"]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carried {
    output: RawSample,
    remainder: CarryState,
}

impl CarryState {
    /// Scale a merged displacement, add the carry and round.
    ///
    /// `x = dx * gain * sensitivity + carry.x` (same for `y`) and
    /// `wheel = dwheel * scrolls_per_tick / 3`.
    #[inline]
    pub fn apply(&self, dx: f32, dy: f32, dwheel: f32, gain: f32, params: &ParameterSet) -> Carried {
        let x = dx * gain * params.sensitivity + self.x;
        let y = dy * gain * params.sensitivity + self.y;
        let wheel = dwheel * params.wheel_ratio();

        let (rx, ry, rw) = (x.round(), y.round(), wheel.round());
        Carried {
            output: RawSample::new(to_output(rx), to_output(ry), to_output(rw)),
            remainder: CarryState {
                x: x - rx,
                y: y - ry,
                wheel: wheel - rw,
            },
        }
    }
}

impl Carried {
    /// The rounded sample.
    #[inline]
    pub fn output(&self) -> RawSample {
        self.output
    }

    /// The carry this result would leave.
    #[inline]
    pub fn remainder(&self) -> CarryState {
        self.remainder
    }

    /// Whether the rounding produced the fault sentinel on any axis.
    #[inline]
    pub fn is_faulted(&self) -> bool {
        self.output.has_sentinel()
    }

    /// Store the remainder into `carry` and return the output.
    #[inline]
    pub fn commit(self, carry: &mut CarryState) -> RawSample {
        *carry = self.remainder;
        self.output
    }
}

/// Convert a rounded value, mapping NaN and out-of-range values to
/// `i32::MIN` like a hardware float-to-int conversion does.
#[allow(
    clippy::cast_possible_truncation,
    reason = "range checked just above"
)]
#[inline]
fn to_output(rounded: f32) -> i32 {
    if (I32_MIN_F32..I32_END_F32).contains(&rounded) {
        rounded as i32
    } else {
        i32::MIN
    }
}
