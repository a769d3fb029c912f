//! bound-forge: constellation boundary catalog pipeline CLI
//!
//! Regenerates the IAU boundary catalog at J2000.0 with denser sampling,
//! inspects catalogs, and converts constellation stick figures.

mod analyze;
mod cli;
mod lines;
mod logging;
mod regenerate;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    match &cli.command {
        Commands::Regenerate(args) => regenerate::run(args, &cli),
        Commands::Analyze(args) => analyze::run(args, &cli),
        Commands::Lines(args) => lines::run(args, &cli),
    }
}
