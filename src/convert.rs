//! Pure conversion functions: CLI flags + TOML config -> library input types.

use anyhow::{Context, Result};

use nitrox_gas::{DistanceUnit, MaxOperatingDepthInput, PartialPressureInput};

use crate::cli::{ModArgs, Ppo2Args};
use crate::config::NitroxConfig;

/// Picks the unit: the `--unit` flag if given, otherwise the config value.
pub fn resolve_unit(flag: Option<&str>, config: &NitroxConfig) -> Result<DistanceUnit> {
    match flag {
        Some(name) => name
            .parse::<DistanceUnit>()
            .with_context(|| format!("invalid --unit value {name:?}")),
        None => Ok(config.unit),
    }
}

/// Builds a [`MaxOperatingDepthInput`] from `mod` arguments and config.
pub fn build_mod_input(args: &ModArgs, config: &NitroxConfig) -> Result<MaxOperatingDepthInput> {
    let unit = resolve_unit(args.common.unit.as_deref(), config)?;
    let po2 = args.po2.unwrap_or(config.po2);
    Ok(MaxOperatingDepthInput::new(unit, po2, args.fo2))
}

/// Builds a [`PartialPressureInput`] from `ppo2` arguments and config.
pub fn build_ppo2_input(args: &Ppo2Args, config: &NitroxConfig) -> Result<PartialPressureInput> {
    let unit = resolve_unit(args.common.unit.as_deref(), config)?;
    Ok(PartialPressureInput::new(unit, args.depth, args.fo2))
}
