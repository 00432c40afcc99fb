//! Parameter files and validation.
//!
//! A parameter file is a JSON or YAML object using the surface keys. Keys
//! that are absent fall back to the compiled-in defaults:
//!
//! ```yaml
//! Sensitivity: 0.8
//! Acceleration: 0.1
//! Exponent: 2.0
//! AccelerationMode: 2
//! ```

use std::path::Path;

use mouseaccel_errors::{ParamError, ValidationError};

use crate::types::{ParamName, ParameterSet};

/// Upper bound accepted for `ScrollsPerTick` in a parameter file.
pub const MAX_SCROLLS_PER_TICK: f32 = 100.0;

impl ParameterSet {
    /// Check that a set is usable.
    ///
    /// Every field must be finite; `SpeedCap` and `SensitivityCap` must be
    /// non-negative; `ScrollsPerTick` must lie in `[0, 100]`.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] found, in surface key order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for name in ParamName::ALL {
            if !self.get(name).is_finite() {
                return Err(ValidationError::non_finite(name.key()));
            }
        }
        for name in [ParamName::SpeedCap, ParamName::SensitivityCap] {
            let value = self.get(name);
            if value < 0.0 {
                return Err(ValidationError::negative(name.key(), value));
            }
        }
        if !(0.0..=MAX_SCROLLS_PER_TICK).contains(&self.scrolls_per_tick) {
            return Err(ValidationError::out_of_range(
                ParamName::ScrollsPerTick.key(),
                self.scrolls_per_tick,
                0.0,
                MAX_SCROLLS_PER_TICK,
            ));
        }
        Ok(())
    }

    /// Decode and validate a JSON parameter object.
    ///
    /// # Errors
    ///
    /// [`ParamError::Json`] on malformed input, [`ParamError::Invalid`] if
    /// the decoded set fails [`ParameterSet::validate`].
    pub fn from_json_str(input: &str) -> Result<Self, ParamError> {
        let params: Self =
            serde_json::from_str(input).map_err(|e| ParamError::Json(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Decode and validate a YAML parameter object.
    ///
    /// # Errors
    ///
    /// [`ParamError::Yaml`] on malformed input, [`ParamError::Invalid`] if
    /// the decoded set fails [`ParameterSet::validate`].
    pub fn from_yaml_str(input: &str) -> Result<Self, ParamError> {
        let params: Self =
            serde_yaml::from_str(input).map_err(|e| ParamError::Yaml(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Load a parameter file, choosing the format from its extension
    /// (`.json`, `.yaml`, `.yml`).
    ///
    /// # Errors
    ///
    /// [`ParamError::UnsupportedFormat`] for any other extension,
    /// [`ParamError::Io`] if the file cannot be read, and the decode or
    /// validation errors of the matching `from_*_str`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParamError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            _ => Err(ParamError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Encode as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`ParamError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ParamError> {
        serde_json::to_string_pretty(self).map_err(|e| ParamError::Json(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::AccelerationMode;

    #[test]
    fn test_defaults_validate() {
        assert!(ParameterSet::default().validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = ParameterSet {
            exponent: f32::NAN,
            ..ParameterSet::default()
        };
        assert_eq!(
            params.validate(),
            Err(ValidationError::non_finite("Exponent"))
        );
    }

    #[test]
    fn test_negative_cap_rejected() {
        let params = ParameterSet {
            speed_cap: -1.0,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ValidationError::Negative { field: "SpeedCap", .. })
        ));
    }

    #[test]
    fn test_scrolls_out_of_range() {
        let params = ParameterSet {
            scrolls_per_tick: 250.0,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ValidationError::OutOfRange { field: "ScrollsPerTick", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() -> Result<(), ParamError> {
        let params = ParameterSet::from_json_str(r#"{"Sensitivity": 0.5, "AccelerationMode": 3}"#)?;
        assert!((params.sensitivity - 0.5).abs() < 1e-6);
        assert_eq!(params.mode, AccelerationMode::Motivity);
        assert!((params.acceleration - 0.04).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_yaml() -> Result<(), ParamError> {
        let params = ParameterSet::from_yaml_str("Exponent: 2.0\nAccelerationMode: 2\n")?;
        assert!((params.exponent - 2.0).abs() < 1e-6);
        assert_eq!(params.mode, AccelerationMode::Classic);
        Ok(())
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ParameterSet::from_json_str("{"),
            Err(ParamError::Json(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() -> Result<(), ParamError> {
        let params = ParameterSet {
            offset: 0.25,
            mode: AccelerationMode::Classic,
            ..ParameterSet::default()
        };
        let json = params.to_json_pretty()?;
        assert_eq!(ParameterSet::from_json_str(&json)?, params);
        Ok(())
    }
}
