//! Ppo2 command: oxygen partial pressure of a gas at depth.

use anyhow::Result;
use tracing::{info, info_span};

use nitrox_gas::Calculation;

use crate::cli::Ppo2Args;
use crate::{config, convert, output};

/// Run the partial pressure calculation and print the result.
pub fn run(args: Ppo2Args) -> Result<()> {
    let _cmd = info_span!("ppo2").entered();
    let config = config::load(args.common.config.as_deref())?;
    let input = convert::build_ppo2_input(&args, &config)?;
    info!(
        unit = %input.unit,
        depth = input.depth,
        fo2 = input.fo2,
        "computing partial pressure of oxygen"
    );

    let calc = Calculation::partial_pressure(&input);
    info!(po2 = calc.value(), "partial pressure of oxygen computed");
    println!("{}", output::render(&calc, args.common.json)?);
    Ok(())
}
