//! Catalog statistics.

use crate::cli::{AnalyzeArgs, Cli, OutputFormat};
use anyhow::Context;
use celestial_bounds::analyze::{analyze, AnalysisReport};
use celestial_bounds::parse::{read_points, CatalogLayout};
use std::fs::File;
use std::io::BufReader;

pub fn run(args: &AnalyzeArgs, cli: &Cli) -> anyhow::Result<()> {
    let layout = CatalogLayout::from(args.layout);
    let (default_header, default_footer) = layout.banner_lines();
    let skip_header = args.skip_header.unwrap_or(default_header);
    let skip_footer = args.skip_footer.unwrap_or(default_footer);

    if cli.verbose {
        eprintln!(
            "Reading {:?} as {:?} (skipping {} header, {} footer lines)",
            args.input, layout, skip_header, skip_footer
        );
    }

    let file =
        File::open(&args.input).with_context(|| format!("Failed to open {:?}", args.input))?;
    let points = read_points(BufReader::new(file), layout, skip_header, skip_footer)
        .with_context(|| format!("Failed to parse {:?}", args.input))?;

    let report = analyze(&points);
    match args.format {
        OutputFormat::Table => print_table(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn print_table(report: &AnalysisReport) {
    println!("=== Catalog Analysis ===");
    println!("{} points processed.", report.points);
    println!("{} repeats", report.repeated_vertices);
    println!("{} new", report.new_vertices);
    println!("Original: {}", report.original);
    println!("Interpolated: {}", report.interpolated);
    match &report.extent {
        Some(e) => {
            println!("RA range: {:.5}h .. {:.5}h", e.ra_min, e.ra_max);
            println!("Dec range: {:+.5}° .. {:+.5}°", e.dec_min, e.dec_max);
        }
        None => println!("Catalog is empty"),
    }
}
