use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use nitrox_gas::DistanceUnit;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "nitrox.toml";

/// Top-level nitrox configuration.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NitroxConfig {
    /// Unit used when `--unit` is not given.
    #[serde(default)]
    pub unit: DistanceUnit,

    /// pO2 limit (bar) used by `mod` when `--po2` is not given.
    #[serde(default = "default_po2")]
    pub po2: f64,
}

impl Default for NitroxConfig {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::default(),
            po2: default_po2(),
        }
    }
}

fn default_po2() -> f64 {
    1.4
}

/// Loads the configuration, falling back to [`DEFAULT_CONFIG_PATH`].
pub fn load(path: Option<&Path>) -> Result<NitroxConfig> {
    load_from(path, Path::new(DEFAULT_CONFIG_PATH))
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, `default_path` is read if
/// present and built-in defaults are used otherwise.
fn load_from(path: Option<&Path>, default_path: &Path) -> Result<NitroxConfig> {
    let path = match path {
        Some(p) => p,
        None if default_path.exists() => default_path,
        None => {
            debug!(path = %default_path.display(), "no config file, using defaults");
            return Ok(NitroxConfig::default());
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: NitroxConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    debug!(path = %path.display(), unit = %config.unit, po2 = config.po2, "config loaded");
    Ok(config)
}
