#![doc = include_str!("../README.md")]

/// Error types for peakscan operations.
pub mod error;
pub use error::{PeakScanError, Result};

/// Batch refinement over detected regions.
pub mod analyze;
/// Common CLI argument definitions for the peakscan binary.
pub mod cli;
/// Plotting of signals and detected peaks.
pub mod plot;
/// Reading series data from numeric text tables.
pub mod read;
/// Threshold-crossing region detection and merging.
pub mod regions;
/// Derivative-based boundary refinement.
pub mod refine;
/// Report rendering and persistence.
pub mod save;
/// Sampled series data model.
pub mod series;

// Re-export commonly used items
pub use analyze::{analyze, analyze_par, valid_reports};
pub use plot::{plot_peaks, save_plot_html};
pub use read::load_table;
pub use refine::{refine, FailureReason, PeakReport, EDGE_SLOPE_FRACTION};
pub use regions::{find_regions, find_regions_pointwise, Region};
pub use save::{format_report_table, read_reports, save_reports, save_reports_json};
pub use series::Series;
