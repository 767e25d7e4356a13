mod cli;
mod config;
mod convert;
mod logging;
mod mod_cmd;
mod output;
mod ppo2_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Mod(args) => mod_cmd::run(args),
        Command::Ppo2(args) => ppo2_cmd::run(args),
    }
}
