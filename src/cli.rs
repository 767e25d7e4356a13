use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nitrox oxygen exposure calculator.
#[derive(Parser)]
#[command(
    name = "nitrox",
    version,
    about = "Maximum operating depth and oxygen partial pressure calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Maximum operating depth of a gas for a pO2 limit.
    Mod(ModArgs),
    /// Partial pressure of oxygen of a gas at a depth.
    Ppo2(Ppo2Args),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Distance unit: `meters` or `feet`. Overrides the config file.
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Path to TOML configuration file (defaults to `nitrox.toml` if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON instead of a summary line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `mod` subcommand.
#[derive(clap::Args)]
pub struct ModArgs {
    /// Oxygen fraction of the gas (0 - 1).
    #[arg(long, allow_negative_numbers = true)]
    pub fo2: f64,

    /// Oxygen partial pressure limit in bar. Overrides the config file.
    #[arg(long)]
    pub po2: Option<f64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the `ppo2` subcommand.
#[derive(clap::Args)]
pub struct Ppo2Args {
    /// Depth in the selected unit.
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: f64,

    /// Oxygen fraction of the gas.
    #[arg(long, allow_negative_numbers = true)]
    pub fo2: f64,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_mod() {
        let cli = Cli::try_parse_from(["nitrox", "mod", "--fo2", "0.32", "--po2", "1.6"]).unwrap();
        let Command::Mod(args) = cli.command else {
            panic!("expected mod subcommand");
        };
        assert_eq!(args.fo2, 0.32);
        assert_eq!(args.po2, Some(1.6));
        assert!(args.common.unit.is_none());
        assert!(!args.common.json);
    }

    #[test]
    fn parse_ppo2_with_common_flags() {
        let cli = Cli::try_parse_from([
            "nitrox", "-vv", "ppo2", "--depth", "33", "--fo2", "0.21", "--unit", "feet", "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Ppo2(args) = cli.command else {
            panic!("expected ppo2 subcommand");
        };
        assert_eq!(args.depth, 33.0);
        assert_eq!(args.common.unit.as_deref(), Some("feet"));
        assert!(args.common.json);
    }

    #[test]
    fn parse_negative_depth() {
        let argv = ["nitrox", "ppo2", "--depth", "-3", "--fo2", "0.21"];
        let cli = Cli::try_parse_from(argv).unwrap();
        let Command::Ppo2(args) = cli.command else {
            panic!("expected ppo2 subcommand");
        };
        assert_eq!(args.depth, -3.0);
    }

    #[test]
    fn mod_requires_fo2() {
        assert!(Cli::try_parse_from(["nitrox", "mod"]).is_err());
    }
}
