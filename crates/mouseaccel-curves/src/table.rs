//! Sampled gain curves for previews and tooling.

use serde::{Deserialize, Serialize};

use mouseaccel_params::ParameterSet;

use crate::error::CurveError;
use crate::gain::apply_curve;

/// One `(rate, gain)` sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GainPoint {
    /// Offset-adjusted rate.
    pub rate: f32,
    /// Gain the engine would apply at that rate.
    pub gain: f32,
}

/// Gain sampled at evenly spaced rates.
///
/// Allocates; build it outside the per-sample path.
///
/// # Example
///
/// ```
/// use mouseaccel_curves::GainTable;
/// use mouseaccel_params::ParameterSet;
///
/// let table = GainTable::sample(&ParameterSet::default(), 0.0, 50.0, 11)?;
/// assert_eq!(table.len(), 11);
/// assert!(table.is_monotonic());
/// # Ok::<(), mouseaccel_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GainTable {
    points: Vec<GainPoint>,
}

impl GainTable {
    /// Sample `steps` rates from `from` to `to` inclusive.
    ///
    /// Rates at or below zero map to themselves, as in [`crate::gain()`].
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidRange`] if the bounds are not finite or
    /// `to <= from`; [`CurveError::TooFewSteps`] if `steps < 2`.
    #[allow(
        clippy::cast_precision_loss,
        reason = "step counts are small enough to be exact in f32"
    )]
    pub fn sample(
        params: &ParameterSet,
        from: f32,
        to: f32,
        steps: usize,
    ) -> Result<Self, CurveError> {
        if !from.is_finite() || !to.is_finite() || to <= from {
            return Err(CurveError::InvalidRange { from, to });
        }
        if steps < 2 {
            return Err(CurveError::TooFewSteps(steps));
        }
        let step = (to - from) / (steps - 1) as f32;
        let points = (0..steps)
            .map(|i| {
                let rate = from + step * i as f32;
                let gain = if rate <= 0.0 {
                    rate
                } else {
                    apply_curve(rate, params)
                };
                GainPoint { rate, gain }
            })
            .collect();
        Ok(Self { points })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples in rate order.
    pub fn points(&self) -> &[GainPoint] {
        &self.points
    }

    /// Largest gain in the table.
    pub fn max_gain(&self) -> Option<f32> {
        self.points
            .iter()
            .map(|point| point.gain)
            .fold(None, |acc, g| Some(acc.map_or(g, |m: f32| m.max(g))))
    }

    /// Whether gain never decreases as rate increases.
    pub fn is_monotonic(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if b.gain >= a.gain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mouseaccel_params::AccelerationMode;

    #[test]
    fn test_sample_endpoints() -> Result<(), CurveError> {
        let table = GainTable::sample(&ParameterSet::default(), 0.0, 100.0, 5)?;
        let rates: Vec<f32> = table.points().iter().map(|p| p.rate).collect();
        assert_eq!(rates.len(), 5);
        assert!(rates.first().is_some_and(|r| r.abs() < 1e-6));
        assert!(rates.last().is_some_and(|r| (r - 100.0).abs() < 1e-4));
        Ok(())
    }

    #[test]
    fn test_negative_rates_pass_through() -> Result<(), CurveError> {
        let table = GainTable::sample(&ParameterSet::default(), -4.0, 0.0, 5)?;
        for point in table.points() {
            assert!((point.gain - point.rate).abs() < 1e-6);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_arguments() {
        let params = ParameterSet::default();
        assert!(matches!(
            GainTable::sample(&params, 5.0, 5.0, 10),
            Err(CurveError::InvalidRange { .. })
        ));
        assert!(matches!(
            GainTable::sample(&params, 0.0, f32::INFINITY, 10),
            Err(CurveError::InvalidRange { .. })
        ));
        assert_eq!(
            GainTable::sample(&params, 0.0, 1.0, 1),
            Err(CurveError::TooFewSteps(1))
        );
    }

    #[test]
    fn test_max_gain_motivity() -> Result<(), CurveError> {
        let params = ParameterSet {
            mode: AccelerationMode::Motivity,
            acceleration: 2.0,
            midpoint: 5.0,
            ..ParameterSet::default()
        };
        let table = GainTable::sample(&params, 0.0, 50.0, 51)?;
        assert!(table.max_gain().is_some_and(|g| g <= 2.0 && g > 1.9));
        assert!(table.is_monotonic());
        Ok(())
    }

    #[test]
    fn test_serialization() -> Result<(), serde_json::Error> {
        let table = GainTable {
            points: vec![GainPoint { rate: 1.0, gain: 1.5 }],
        };
        let json = serde_json::to_string(&table)?;
        assert_eq!(json, r#"{"points":[{"rate":1.0,"gain":1.5}]}"#);
        let back: GainTable = serde_json::from_str(&json)?;
        assert_eq!(back, table);
        Ok(())
    }
}
