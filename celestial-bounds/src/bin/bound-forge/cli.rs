//! CLI argument definitions for bound-forge

use celestial_bounds::parse::CatalogLayout;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bound-forge")]
#[command(about = "Constellation boundary catalog pipeline")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Densify a B1875.0 boundary catalog and precess it to J2000.0
    Regenerate(RegenerateArgs),

    /// Report point, vertex and extent statistics for a catalog
    Analyze(AnalyzeArgs),

    /// Convert GeoJSON constellation lines to RA hours / Dec degrees
    Lines(LinesArgs),
}

#[derive(Parser)]
pub struct RegenerateArgs {
    /// Source boundary catalog (raw layout)
    #[arg(long)]
    pub input: PathBuf,

    /// Output catalog file
    #[arg(long)]
    pub output: PathBuf,

    /// Subdivisions per unit of segment length
    #[arg(long, default_value = "1.0")]
    pub density: f64,

    /// Besselian epoch of the source catalog
    #[arg(long, default_value = "1875.0")]
    pub start_epoch: f64,

    /// Degree-equivalents per hour of RA in the length estimate
    #[arg(long, default_value = "15.0")]
    pub ra_scale: f64,

    /// Floor of the cos(dec) compression of RA length, in [0, 1]
    #[arg(long, default_value = "0.5")]
    pub pole_blend: f64,

    /// Number of threads for parallel processing (0 = all cores)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Catalog file to inspect
    #[arg(long)]
    pub input: PathBuf,

    /// Record layout of the input
    #[arg(long, value_enum, default_value_t = LayoutArg::Raw)]
    pub layout: LayoutArg,

    /// Leading lines to skip (default: 7 for annotated, 0 for raw)
    #[arg(long)]
    pub skip_header: Option<usize>,

    /// Trailing lines to skip (default: 2 for annotated, 0 for raw)
    #[arg(long)]
    pub skip_footer: Option<usize>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Parser)]
pub struct LinesArgs {
    /// GeoJSON FeatureCollection of constellation lines
    #[arg(long)]
    pub input: PathBuf,

    /// Output JSON file (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// `RA DEC CON [CON]`, 5 decimals
    Raw,
    /// `RA DEC|CON |F`, 7 decimals with original flag
    Annotated,
}

impl From<LayoutArg> for CatalogLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Raw => CatalogLayout::Raw,
            LayoutArg::Annotated => CatalogLayout::Annotated,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
