//! Command-line interface definitions for the peakscan binary.
//!
//! The original tool prompted interactively for every parameter; this
//! replaces that with an explicit argument structure so the analysis can
//! also be driven programmatically without a terminal.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How above-threshold samples are grouped into regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DetectionMode {
    /// Group samples into maximal above-threshold runs before merging.
    #[value(name = "regions")]
    Regions,
    /// Historical behavior: treat every above-threshold sample as its
    /// own candidate and rely on the merge pass alone.
    #[value(name = "pointwise")]
    Pointwise,
}

impl fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionMode::Regions => write!(f, "regions"),
            DetectionMode::Pointwise => write!(f, "pointwise"),
        }
    }
}

/// Extract peaks above a threshold from a sampled (x, y) series.
#[derive(Parser, Debug, Clone)]
#[command(name = "peakscan", version, about)]
pub struct Args {
    /// Input file: whitespace- or comma-delimited numeric table
    pub input: PathBuf,

    /// 0-based column index of the abscissa
    #[arg(long, default_value_t = 0)]
    pub col_x: usize,

    /// 0-based column index of the ordinate
    #[arg(long, default_value_t = 1)]
    pub col_y: usize,

    /// Amplitude threshold A0; samples above it are candidate peak material
    #[arg(long, short = 't')]
    pub threshold: f64,

    /// Minimum x-distance between above-threshold runs before they merge
    #[arg(long, default_value_t = 0.1)]
    pub min_width: f64,

    /// Region detection variant
    #[arg(long, value_enum, default_value_t = DetectionMode::Regions)]
    pub mode: DetectionMode,

    /// Write the valid peaks to this path as a flat numeric table
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Write all reports (invalid included) to this path as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write an HTML plot of the signal and detected peaks to this path
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Refine regions on the rayon thread pool
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
}
