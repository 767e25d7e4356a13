//! Mod command: maximum operating depth for a gas.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nitrox_gas::Calculation;

use crate::cli::ModArgs;
use crate::{config, convert, output};

/// Run the maximum operating depth calculation and print the result.
pub fn run(args: ModArgs) -> Result<()> {
    let _cmd = info_span!("mod").entered();
    let config = config::load(args.common.config.as_deref())?;
    let input = convert::build_mod_input(&args, &config)?;
    info!(
        unit = %input.unit,
        po2 = input.po2,
        fo2 = input.fo2,
        "computing maximum operating depth"
    );

    let calc = Calculation::max_operating_depth(&input)
        .context("maximum operating depth calculation failed")?;
    info!(depth = calc.value(), "maximum operating depth computed");
    println!("{}", output::render(&calc, args.common.json)?);
    Ok(())
}
