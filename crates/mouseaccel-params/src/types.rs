//! The typed parameter set and its key table.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::mode::AccelerationMode;

/// Live tunables read by every curve evaluation.
///
/// The set is `Copy` so a reload can build a complete replacement and
/// install it with a single assignment; no reader ever sees a mix of old and
/// new fields.
///
/// Serialized field names match the external surface keys (`SpeedCap`,
/// `Sensitivity`, ...). Missing fields fall back to [`defaults`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParameterSet {
    /// Displacement cap applied before the rate is computed; `0` disables it.
    pub speed_cap: f32,
    /// Final multiplier applied to both axes.
    pub sensitivity: f32,
    /// Curve slope (Linear, Classic) or amplitude (Motivity).
    pub acceleration: f32,
    /// Sensitivity cap. Carried on the surface; the curves do not read it.
    pub sensitivity_cap: f32,
    /// Rate offset subtracted before a curve is applied.
    pub offset: f32,
    /// Classic curve exponent.
    pub exponent: f32,
    /// Motivity sigmoid midpoint.
    pub midpoint: f32,
    /// Lines per wheel tick, relative to a reference of 3.
    pub scrolls_per_tick: f32,
    /// Curve family.
    #[serde(rename = "AccelerationMode")]
    pub mode: AccelerationMode,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            speed_cap: defaults::SPEED_CAP,
            sensitivity: defaults::SENSITIVITY,
            acceleration: defaults::ACCELERATION,
            sensitivity_cap: defaults::SENSITIVITY_CAP,
            offset: defaults::OFFSET,
            exponent: defaults::EXPONENT,
            midpoint: defaults::MIDPOINT,
            scrolls_per_tick: defaults::SCROLLS_PER_TICK,
            mode: defaults::ACCELERATION_MODE,
        }
    }
}

impl ParameterSet {
    /// Read a float tunable by name.
    #[inline]
    pub fn get(&self, name: ParamName) -> f32 {
        match name {
            ParamName::SpeedCap => self.speed_cap,
            ParamName::Sensitivity => self.sensitivity,
            ParamName::Acceleration => self.acceleration,
            ParamName::SensitivityCap => self.sensitivity_cap,
            ParamName::Offset => self.offset,
            ParamName::Exponent => self.exponent,
            ParamName::Midpoint => self.midpoint,
            ParamName::ScrollsPerTick => self.scrolls_per_tick,
        }
    }

    /// Write a float tunable by name.
    #[inline]
    pub fn set(&mut self, name: ParamName, value: f32) {
        let slot = match name {
            ParamName::SpeedCap => &mut self.speed_cap,
            ParamName::Sensitivity => &mut self.sensitivity,
            ParamName::Acceleration => &mut self.acceleration,
            ParamName::SensitivityCap => &mut self.sensitivity_cap,
            ParamName::Offset => &mut self.offset,
            ParamName::Exponent => &mut self.exponent,
            ParamName::Midpoint => &mut self.midpoint,
            ParamName::ScrollsPerTick => &mut self.scrolls_per_tick,
        };
        *slot = value;
    }

    /// Wheel rescale factor, `scrolls_per_tick / 3`.
    #[inline]
    pub fn wheel_ratio(&self) -> f32 {
        self.scrolls_per_tick / defaults::REFERENCE_SCROLLS_PER_TICK
    }
}

/// Float tunables exposed on the external surface.
///
/// The acceleration mode is an integer and is handled separately by
/// [`crate::TunableSurface::set_mode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamName {
    /// `SpeedCap`
    SpeedCap,
    /// `Sensitivity`
    Sensitivity,
    /// `Acceleration`
    Acceleration,
    /// `SensitivityCap`
    SensitivityCap,
    /// `Offset`
    Offset,
    /// `Exponent`
    Exponent,
    /// `Midpoint`
    Midpoint,
    /// `ScrollsPerTick`
    ScrollsPerTick,
}

impl ParamName {
    /// Number of float tunables.
    pub const COUNT: usize = 8;

    /// All float tunables, in surface order.
    pub const ALL: [ParamName; Self::COUNT] = [
        ParamName::SpeedCap,
        ParamName::Sensitivity,
        ParamName::Acceleration,
        ParamName::SensitivityCap,
        ParamName::Offset,
        ParamName::Exponent,
        ParamName::Midpoint,
        ParamName::ScrollsPerTick,
    ];

    /// Position in [`ParamName::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Surface key.
    pub fn key(self) -> &'static str {
        match self {
            ParamName::SpeedCap => "SpeedCap",
            ParamName::Sensitivity => "Sensitivity",
            ParamName::Acceleration => "Acceleration",
            ParamName::SensitivityCap => "SensitivityCap",
            ParamName::Offset => "Offset",
            ParamName::Exponent => "Exponent",
            ParamName::Midpoint => "Midpoint",
            ParamName::ScrollsPerTick => "ScrollsPerTick",
        }
    }

    /// Look up a tunable by surface key (exact match).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.key() == key)
    }

    /// One-line description shown next to the key.
    pub fn description(self) -> &'static str {
        match self {
            ParamName::SpeedCap => "Limit the maximum pointer speed before applying acceleration.",
            ParamName::Sensitivity => "Mouse base sensitivity.",
            ParamName::Acceleration => "Mouse acceleration sensitivity.",
            ParamName::SensitivityCap => "Cap maximum sensitivity.",
            ParamName::Offset => "Rate offset below which no acceleration is applied.",
            ParamName::Exponent => "Exponent for algorithms that use it.",
            ParamName::Midpoint => "Midpoint for sigmoid function.",
            ParamName::ScrollsPerTick => "Amount of lines to scroll per scroll-wheel tick.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ParameterSet::default();
        assert!((params.sensitivity - 1.0).abs() < 1e-6);
        assert!((params.acceleration - 0.04).abs() < 1e-6);
        assert!((params.sensitivity_cap - 2.2).abs() < 1e-6);
        assert!(params.speed_cap.abs() < 1e-6);
        assert!((params.scrolls_per_tick - 3.0).abs() < 1e-6);
        assert_eq!(params.mode, AccelerationMode::Linear);
    }

    #[test]
    fn test_get_set_every_name() {
        let mut params = ParameterSet::default();
        for (i, name) in ParamName::ALL.into_iter().enumerate() {
            let value = 10.0 + i as f32;
            params.set(name, value);
            assert!((params.get(name) - value).abs() < 1e-6, "{name:?}");
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, name) in ParamName::ALL.into_iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }

    #[test]
    fn test_key_roundtrip() {
        for name in ParamName::ALL {
            assert_eq!(ParamName::from_key(name.key()), Some(name));
        }
        assert_eq!(ParamName::from_key("speedcap"), None);
        assert_eq!(ParamName::from_key("AccelerationMode"), None);
    }

    #[test]
    fn test_wheel_ratio_default_is_identity() {
        assert!((ParameterSet::default().wheel_ratio() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_serde_uses_surface_keys() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(ParameterSet::default())?;
        for name in ParamName::ALL {
            assert!(json.get(name.key()).is_some(), "missing {}", name.key());
        }
        assert_eq!(
            json.get("AccelerationMode").and_then(serde_json::Value::as_u64),
            Some(1)
        );
        Ok(())
    }
}
