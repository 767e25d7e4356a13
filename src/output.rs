use anyhow::{Context, Result};

use nitrox_gas::Calculation;

/// Renders a calculation as pretty JSON or as its summary line.
pub fn render(calc: &Calculation, json: bool) -> Result<String> {
    if json {
        calc.to_json().context("failed to serialize result")
    } else {
        Ok(calc.to_string())
    }
}
