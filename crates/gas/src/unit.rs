//! Distance units and their seawater pressure constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GasError;

/// Depth unit used for both inputs and results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Meters of seawater (msw).
    #[default]
    Meters,
    /// Feet of seawater (fsw).
    Feet,
}

impl DistanceUnit {
    /// Depth of seawater, in this unit, that adds one atmosphere of pressure.
    pub fn depth_per_atmosphere(self) -> f64 {
        match self {
            Self::Meters => 10.0,
            Self::Feet => 33.0,
        }
    }

    /// Absolute pressure in atmospheres at `depth` (surface atmosphere included).
    pub fn ata_at_depth(self, depth: f64) -> f64 {
        1.0 + depth / self.depth_per_atmosphere()
    }

    /// Returns the canonical lowercase name (`"meters"` or `"feet"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meters => "meters",
            Self::Feet => "feet",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = GasError;

    /// Parses exactly `"meters"` or `"feet"`.
    ///
    /// # Errors
    ///
    /// Returns [`GasError::InvalidUnit`] for any other string, including `""`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meters" => Ok(Self::Meters),
            "feet" => Ok(Self::Feet),
            other => Err(GasError::InvalidUnit {
                unit: other.to_string(),
            }),
        }
    }
}
