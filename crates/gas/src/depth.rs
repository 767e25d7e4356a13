//! Maximum operating depth (MOD) of a breathing gas.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::GasError;
use crate::unit::DistanceUnit;

/// Inputs for a maximum operating depth calculation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaxOperatingDepthInput {
    /// Unit of the returned depth.
    pub unit: DistanceUnit,
    /// Oxygen partial pressure limit in bar.
    pub po2: f64,
    /// Oxygen fraction of the gas, 0..=1.
    pub fo2: f64,
}

impl MaxOperatingDepthInput {
    /// Creates a new input from its parts.
    pub fn new(unit: DistanceUnit, po2: f64, fo2: f64) -> Self {
        Self { unit, po2, fo2 }
    }
}

/// Computes the deepest depth at which the gas stays at or below the pO2 limit.
///
/// `(po2 / fo2 - 1) * unit.depth_per_atmosphere()`
///
/// An `fo2` of exactly 0 is accepted and yields a non-finite depth
/// (`+inf`, or NaN when `po2` is also 0).
///
/// # Errors
///
/// Returns [`GasError::Fo2OutOfRange`] if `fo2 > 1` or `fo2 < 0`.
///
/// # Examples
///
/// ```
/// use nitrox_gas::{DistanceUnit, MaxOperatingDepthInput, maximum_operating_depth};
///
/// let input = MaxOperatingDepthInput::new(DistanceUnit::Feet, 1.4, 0.21);
/// let depth = maximum_operating_depth(&input).unwrap();
/// assert!((depth - 187.0).abs() < 1e-9);
/// ```
#[tracing::instrument(level = "debug", skip(input), fields(unit = %input.unit, po2 = input.po2, fo2 = input.fo2))]
pub fn maximum_operating_depth(input: &MaxOperatingDepthInput) -> Result<f64, GasError> {
    let MaxOperatingDepthInput { unit, po2, fo2 } = *input;
    check_fo2(fo2)?;
    if fo2 == 0.0 {
        warn!(po2, "FO2 of 0 has no maximum operating depth");
    }
    let depth = (po2 / fo2 - 1.0) * unit.depth_per_atmosphere();
    debug!(depth, "maximum operating depth computed");
    Ok(depth)
}

/// Computes the maximum operating depth from an unparsed unit name.
///
/// The FO2 range is checked before the unit name.
///
/// # Errors
///
/// Returns [`GasError::Fo2OutOfRange`] for an FO2 outside 0..=1 and
/// [`GasError::InvalidUnit`] if `unit` is neither `"meters"` nor `"feet"`.
pub fn maximum_operating_depth_str(unit: &str, po2: f64, fo2: f64) -> Result<f64, GasError> {
    check_fo2(fo2)?;
    let unit: DistanceUnit = unit.parse()?;
    maximum_operating_depth(&MaxOperatingDepthInput::new(unit, po2, fo2))
}

// NaN is not rejected here.
#[allow(clippy::manual_range_contains)]
fn check_fo2(fo2: f64) -> Result<(), GasError> {
    if fo2 > 1.0 || fo2 < 0.0 {
        return Err(GasError::Fo2OutOfRange { fo2 });
    }
    Ok(())
}
