//! Boundary regeneration: parse, deduplicate, densify, precess, write.

use crate::cli::{Cli, RegenerateArgs};
use anyhow::Context;
use celestial_bounds::format::{format_catalog, write_catalog};
use celestial_bounds::parse::read_catalog;
use celestial_bounds::pipeline::interpolate_segments;
use celestial_bounds::{build_segments, BoundaryPoint, DensityModel, RegenerateConfig, Regenerated};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn run(args: &RegenerateArgs, cli: &Cli) -> anyhow::Result<()> {
    let config = build_config(args);
    config.validate()?;
    configure_thread_pool(args.threads);
    print_plan(args, cli);

    let points = load_points(&args.input)?;
    println!("Parsed {} boundary points", points.len());

    let regenerated = densify(&points, &config);
    let lines = format_catalog(&regenerated.groups);
    write_catalog(&args.output, &lines)
        .with_context(|| format!("Failed to write {:?}", args.output))?;

    print_summary(points.len(), &regenerated, &args.output);
    Ok(())
}

fn build_config(args: &RegenerateArgs) -> RegenerateConfig {
    RegenerateConfig {
        density: args.density,
        start_epoch: args.start_epoch,
        model: DensityModel {
            ra_scale: args.ra_scale,
            pole_blend: args.pole_blend,
        },
    }
}

fn print_plan(args: &RegenerateArgs, cli: &Cli) {
    println!("=== Boundary Regeneration ===");
    println!("Input: {:?}", args.input);
    println!("Output: {:?}", args.output);
    println!("Density: {} points per unit length", args.density);
    println!("Start epoch: B{:.1}", args.start_epoch);
    println!("RA scale: {}, pole blend: {}", args.ra_scale, args.pole_blend);
    println!("Threads: {}", resolve_threads(args.threads));
    println!("Verbose: {}", cli.verbose);
    println!();
}

fn resolve_threads(threads: usize) -> usize {
    if threads == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    } else {
        threads
    }
}

fn configure_thread_pool(threads: usize) {
    rayon::ThreadPoolBuilder::new()
        .num_threads(resolve_threads(threads))
        .build_global()
        .ok();
}

fn load_points(path: &Path) -> anyhow::Result<Vec<BoundaryPoint>> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    read_catalog(BufReader::new(file)).with_context(|| format!("Failed to parse {:?}", path))
}

fn densify(points: &[BoundaryPoint], config: &RegenerateConfig) -> Regenerated {
    let set = build_segments(points);
    let stats = set.stats();
    println!("{} repeats", stats.repeats);
    println!("{} new", stats.new);

    let pb = create_progress_bar(set.len() as u64);
    let groups = interpolate_segments(set.segments(), config, || pb.inc(1));
    pb.finish_with_message("Done");

    Regenerated { groups, stats }
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

fn print_summary(parsed: usize, regenerated: &Regenerated, output: &Path) {
    println!();
    println!("=== Summary ===");
    println!("Points parsed: {}", parsed);
    println!("Segments: {} new, {} repeats", regenerated.stats.new, regenerated.stats.repeats);
    println!("Traversal gaps skipped: {}", regenerated.stats.gaps);
    println!("Points written: {}", regenerated.total_points());
    println!("  Original: {}", regenerated.original_points());
    println!("  Interpolated: {}", regenerated.interpolated_points());
    println!("Written to {:?}", output);
}
