//! Serialisable calculation results.

use std::fmt;

use serde::Serialize;

use crate::depth::{MaxOperatingDepthInput, maximum_operating_depth};
use crate::error::GasError;
use crate::pressure::{PartialPressureInput, partial_pressure_of_oxygen};
use crate::unit::DistanceUnit;

/// A finished calculation together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Calculation {
    /// Result of [`maximum_operating_depth`].
    MaxOperatingDepth {
        unit: DistanceUnit,
        po2: f64,
        fo2: f64,
        depth: f64,
    },
    /// Result of [`partial_pressure_of_oxygen`].
    PartialPressure {
        unit: DistanceUnit,
        depth: f64,
        fo2: f64,
        po2: f64,
    },
}

impl Calculation {
    /// Runs a maximum operating depth calculation and records it.
    ///
    /// # Errors
    ///
    /// Propagates [`GasError::Fo2OutOfRange`].
    pub fn max_operating_depth(input: &MaxOperatingDepthInput) -> Result<Self, GasError> {
        let depth = maximum_operating_depth(input)?;
        Ok(Self::MaxOperatingDepth {
            unit: input.unit,
            po2: input.po2,
            fo2: input.fo2,
            depth,
        })
    }

    /// Runs a partial pressure calculation and records it.
    pub fn partial_pressure(input: &PartialPressureInput) -> Self {
        Self::PartialPressure {
            unit: input.unit,
            depth: input.depth,
            fo2: input.fo2,
            po2: partial_pressure_of_oxygen(input),
        }
    }

    /// The computed value: a depth for MOD, a pressure in bar for pO2.
    pub fn value(&self) -> f64 {
        match *self {
            Self::MaxOperatingDepth { depth, .. } => depth,
            Self::PartialPressure { po2, .. } => po2,
        }
    }

    /// Serialize to a pretty-printed JSON string.
    ///
    /// Non-finite values (an FO2 of 0 in a MOD calculation) become `null`.
    pub fn to_json(&self) -> Result<String, GasError> {
        serde_json::to_string_pretty(self).map_err(|e| GasError::Serialization {
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxOperatingDepth {
                unit,
                po2,
                fo2,
                depth,
            } => write!(f, "MOD {depth:.2} {unit} (pO2 {po2:.2}, FO2 {fo2:.2})"),
            Self::PartialPressure {
                unit,
                depth,
                fo2,
                po2,
            } => write!(f, "pO2 {po2:.2} bar at {depth:.2} {unit} (FO2 {fo2:.2})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mod_display() {
        let calc = Calculation::max_operating_depth(&MaxOperatingDepthInput::new(
            DistanceUnit::Meters,
            1.4,
            0.21,
        ))
        .unwrap();
        assert_eq!(calc.to_string(), "MOD 56.67 meters (pO2 1.40, FO2 0.21)");
    }

    #[test]
    fn ppo2_display() {
        let input = PartialPressureInput::new(DistanceUnit::Feet, 33.0, 0.21);
        let calc = Calculation::partial_pressure(&input);
        assert_eq!(calc.to_string(), "pO2 0.42 bar at 33.00 feet (FO2 0.21)");
    }

    #[test]
    fn value_returns_result() {
        let input = PartialPressureInput::new(DistanceUnit::Meters, 10.0, 0.08);
        let calc = Calculation::partial_pressure(&input);
        assert_abs_diff_eq!(calc.value(), 0.16, epsilon = 1e-12);
    }

    #[test]
    fn out_of_range_fo2_propagates() {
        let result = Calculation::max_operating_depth(&MaxOperatingDepthInput::new(
            DistanceUnit::Meters,
            1.4,
            1.5,
        ));
        assert!(matches!(result, Err(GasError::Fo2OutOfRange { .. })));
    }

    #[test]
    fn json_is_tagged() {
        let calc = Calculation::max_operating_depth(&MaxOperatingDepthInput::new(
            DistanceUnit::Feet,
            1.4,
            0.21,
        ))
        .unwrap();
        let json = calc.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["kind"], "max_operating_depth");
        assert_eq!(parsed["unit"], "feet");
        assert_abs_diff_eq!(parsed["depth"].as_f64().unwrap(), 187.0, epsilon = 1e-9);
    }

    #[test]
    fn json_infinite_depth_is_null() {
        let calc = Calculation::max_operating_depth(&MaxOperatingDepthInput::new(
            DistanceUnit::Meters,
            1.4,
            0.0,
        ))
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&calc.to_json().unwrap()).unwrap();
        assert!(parsed["depth"].is_null());
    }
}
