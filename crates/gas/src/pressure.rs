//! Partial pressure of oxygen at depth.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::GasError;
use crate::unit::DistanceUnit;

/// Inputs for a partial pressure of oxygen calculation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialPressureInput {
    /// Unit of `depth`.
    pub unit: DistanceUnit,
    /// Depth below the surface.
    pub depth: f64,
    /// Oxygen fraction of the gas.
    pub fo2: f64,
}

impl PartialPressureInput {
    /// Creates a new input from its parts.
    pub fn new(unit: DistanceUnit, depth: f64, fo2: f64) -> Self {
        Self { unit, depth, fo2 }
    }
}

/// Computes the oxygen partial pressure, in bar, of a gas breathed at `depth`.
///
/// `fo2 * (1 + depth / unit.depth_per_atmosphere())`
///
/// Neither `fo2` nor `depth` is range-checked; out-of-range values are
/// logged at `warn` level and still computed.
#[allow(clippy::manual_range_contains)]
#[tracing::instrument(level = "debug", skip(input), fields(unit = %input.unit, depth = input.depth, fo2 = input.fo2))]
pub fn partial_pressure_of_oxygen(input: &PartialPressureInput) -> f64 {
    let PartialPressureInput { unit, depth, fo2 } = *input;
    if fo2 > 1.0 || fo2 < 0.0 {
        warn!(fo2, "FO2 outside 0 - 1");
    }
    if depth < 0.0 {
        warn!(depth, "negative depth");
    }
    let po2 = fo2 * unit.ata_at_depth(depth);
    debug!(po2, "partial pressure of oxygen computed");
    po2
}

/// Computes the partial pressure of oxygen from an unparsed unit name.
///
/// # Errors
///
/// Returns [`GasError::InvalidUnit`] if `unit` is neither `"meters"` nor `"feet"`.
pub fn partial_pressure_of_oxygen_str(unit: &str, depth: f64, fo2: f64) -> Result<f64, GasError> {
    let unit: DistanceUnit = unit.parse()?;
    let input = PartialPressureInput::new(unit, depth, fo2);
    Ok(partial_pressure_of_oxygen(&input))
}
