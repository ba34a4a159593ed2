//! Batch refinement of detected regions.
//!
//! Regions are refined independently of one another, so the batch is a
//! plain map over the region list. Output order always matches region
//! order; the parallel variant relies on rayon's indexed collect to put
//! each report back at its region's position.

use rayon::prelude::*;

use crate::refine::{refine, PeakReport};
use crate::regions::Region;
use crate::series::Series;

/// Refine every region in order, sequentially.
pub fn analyze(series: &Series, regions: &[Region]) -> Vec<PeakReport> {
    regions.iter().map(|&r| refine(series, r)).collect()
}

/// Refine every region on the rayon thread pool.
///
/// Worth it for large batches; per-region work is small, so the
/// sequential [`analyze`] is the right default.
pub fn analyze_par(series: &Series, regions: &[Region]) -> Vec<PeakReport> {
    regions.par_iter().map(|&r| refine(series, r)).collect()
}

/// View over the reports whose refinement succeeded. Display and export
/// use this subset; the full sequence keeps the invalid reports for
/// diagnostics.
pub fn valid_reports(reports: &[PeakReport]) -> impl Iterator<Item = &PeakReport> {
    reports.iter().filter(|r| r.valid)
}
