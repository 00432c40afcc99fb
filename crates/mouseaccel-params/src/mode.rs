//! Acceleration curve selector.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which curve family turns a rate into a gain.
///
/// The external surface sets this as a small integer: `1` Linear, `2`
/// Classic, `3` Motivity. Any other code selects [`Passthrough`], where the
/// rate itself is used as the gain.
///
/// [`Passthrough`]: AccelerationMode::Passthrough
///
/// # Example
///
/// ```
/// use mouseaccel_params::AccelerationMode;
///
/// assert_eq!(AccelerationMode::from_code(2), AccelerationMode::Classic);
/// assert_eq!(AccelerationMode::from_code(9), AccelerationMode::Passthrough);
/// assert_eq!(AccelerationMode::Motivity.code(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum AccelerationMode {
    /// No curve; gain equals rate.
    Passthrough,
    /// `rate * acceleration + 1`
    #[default]
    Linear,
    /// `(rate * acceleration + 1) ^ exponent`
    Classic,
    /// `acceleration / (1 + e^(midpoint - rate))`
    Motivity,
}

impl AccelerationMode {
    /// Map an external mode code to a mode.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => AccelerationMode::Linear,
            2 => AccelerationMode::Classic,
            3 => AccelerationMode::Motivity,
            _ => AccelerationMode::Passthrough,
        }
    }

    /// External mode code. `Passthrough` reports `0`.
    pub fn code(self) -> u8 {
        match self {
            AccelerationMode::Passthrough => 0,
            AccelerationMode::Linear => 1,
            AccelerationMode::Classic => 2,
            AccelerationMode::Motivity => 3,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            AccelerationMode::Passthrough => "passthrough",
            AccelerationMode::Linear => "linear",
            AccelerationMode::Classic => "classic",
            AccelerationMode::Motivity => "motivity",
        }
    }
}

impl From<u8> for AccelerationMode {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl From<AccelerationMode> for u8 {
    fn from(mode: AccelerationMode) -> Self {
        mode.code()
    }
}

impl fmt::Display for AccelerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_roundtrip() {
        for mode in [
            AccelerationMode::Linear,
            AccelerationMode::Classic,
            AccelerationMode::Motivity,
        ] {
            assert_eq!(AccelerationMode::from_code(mode.code()), mode);
        }
    }

    #[test]
    fn test_unknown_codes_are_passthrough() {
        for code in [0u8, 4, 17, 255] {
            assert_eq!(
                AccelerationMode::from_code(code),
                AccelerationMode::Passthrough
            );
        }
    }

    #[test]
    fn test_serde_as_integer() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&AccelerationMode::Classic)?;
        assert_eq!(json, "2");
        let mode: AccelerationMode = serde_json::from_str("3")?;
        assert_eq!(mode, AccelerationMode::Motivity);
        let mode: AccelerationMode = serde_json::from_str("42")?;
        assert_eq!(mode, AccelerationMode::Passthrough);
        Ok(())
    }
}
