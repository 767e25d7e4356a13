//! # nitrox-gas
//!
//! Oxygen exposure formulas for breathing gas planning.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str"] -->|"DistanceUnit::from_str()"| B["DistanceUnit"]
//!     B --> C["MaxOperatingDepthInput"]
//!     B --> D["PartialPressureInput"]
//!     C -->|"maximum_operating_depth()"| E["depth"]
//!     D -->|"partial_pressure_of_oxygen()"| F["pO2"]
//!     E --> G["Calculation"]
//!     F --> G
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use nitrox_gas::{
//!     DistanceUnit, MaxOperatingDepthInput, PartialPressureInput, maximum_operating_depth,
//!     partial_pressure_of_oxygen,
//! };
//!
//! // EAN21 with a 1.4 bar limit
//! let input = MaxOperatingDepthInput::new(DistanceUnit::Meters, 1.4, 0.21);
//! let mod_m = maximum_operating_depth(&input).unwrap();
//! assert!((mod_m - 56.67).abs() < 0.01);
//!
//! // Air at 33 fsw (2 ATA)
//! let input = PartialPressureInput::new(DistanceUnit::Feet, 33.0, 0.21);
//! assert_eq!(partial_pressure_of_oxygen(&input), 0.42);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `unit` | Distance unit and its depth-per-atmosphere constant |
//! | `depth` | Maximum operating depth |
//! | `pressure` | Partial pressure of oxygen at depth |
//! | `report` | Serialisable calculation results |
//! | `error` | Error types |

mod depth;
mod error;
mod pressure;
mod report;
mod unit;

pub use depth::{MaxOperatingDepthInput, maximum_operating_depth, maximum_operating_depth_str};
pub use error::{ErrorKind, GasError};
pub use pressure::{
    PartialPressureInput, partial_pressure_of_oxygen, partial_pressure_of_oxygen_str,
};
pub use report::Calculation;
pub use unit::DistanceUnit;
