//! Constellation stick-figure conversion.

use crate::cli::{Cli, LinesArgs};
use anyhow::Context;
use celestial_bounds::lines::{convert_constellation_lines, to_json};
use std::fs;

pub fn run(args: &LinesArgs, cli: &Cli) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {:?}", args.input))?;
    let lines = convert_constellation_lines(&text)
        .with_context(|| format!("Failed to convert {:?}", args.input))?;
    let json = to_json(&lines)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
            if cli.verbose {
                eprintln!("Converted {} constellations to {:?}", lines.len(), path);
            }
        }
        None => println!("{}", json),
    }
    Ok(())
}
