//! Threshold-crossing region detection and proximity merging.
//!
//! A region is a contiguous index span of samples whose ordinate exceeds
//! the amplitude threshold. Spans closer together (in x) than the minimum
//! separation are merged into one region before refinement.

use crate::series::Series;

/// An inclusive index range `[left, right]` into a [`Series`].
///
/// Produced by the detection functions, consumed by
/// [`crate::refine::refine`]. A region may span a single sample
/// (`left == right`); refinement flags those as non-actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Index of the first sample in the region.
    pub left: usize,
    /// Index of the last sample in the region (inclusive).
    pub right: usize,
}

impl Region {
    /// Number of samples covered by the region.
    pub fn sample_count(&self) -> usize {
        self.right - self.left + 1
    }
}

/// Find maximal runs of `y > threshold` and merge runs whose x-gap is
/// smaller than `min_separation`.
///
/// Runs are detected with a single linear scan, so excursions touching
/// either end of the series are handled like any other. The merge pass
/// keeps an accumulator region and extends it whenever the next run
/// starts closer than `min_separation` to the accumulator's right edge:
/// the comparison is strict (`gap < min_separation`), an exact tie does
/// not merge. The proximity test uses boundary coordinates only and is
/// independent of amplitude.
///
/// Returns regions disjoint and sorted by start index; empty when no
/// sample exceeds the threshold.
pub fn find_regions(series: &Series, threshold: f64, min_separation: f64) -> Vec<Region> {
    let runs = above_threshold_runs(series, threshold);
    merge_close_regions(series, runs, min_separation)
}

/// Historical detection variant: every sample above the threshold starts
/// as its own single-sample region before the merge pass.
///
/// Unlike [`find_regions`], consecutive above-threshold samples only end
/// up in the same region when their x-spacing is below `min_separation`,
/// so a wide run of sparse samples can split into several single-sample
/// regions (each of which refinement then reports as invalid). Kept as an
/// alternate mode because the behavior difference is observable and some
/// existing result sets were produced with it.
pub fn find_regions_pointwise(series: &Series, threshold: f64, min_separation: f64) -> Vec<Region> {
    let singles: Vec<Region> = series
        .y
        .iter()
        .enumerate()
        .filter(|(_, &v)| v > threshold)
        .map(|(i, _)| Region { left: i, right: i })
        .collect();
    merge_close_regions(series, singles, min_separation)
}

/// Linear scan producing the maximal runs of `y > threshold`.
fn above_threshold_runs(series: &Series, threshold: f64) -> Vec<Region> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &v) in series.y.iter().enumerate() {
        match (start, v > threshold) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                runs.push(Region { left: s, right: i - 1 });
                start = None;
            }
            _ => {}
        }
    }
    // Run still open at the end of the series
    if let Some(s) = start {
        runs.push(Region {
            left: s,
            right: series.len() - 1,
        });
    }
    runs
}

/// Merge pass over index-ordered regions, strict `<` on the x-gap.
fn merge_close_regions(series: &Series, runs: Vec<Region>, min_separation: f64) -> Vec<Region> {
    let mut merged = Vec::with_capacity(runs.len());
    let mut iter = runs.into_iter();

    let Some(mut current) = iter.next() else {
        return merged;
    };
    for next in iter {
        if series.x[next.left] - series.x[current.right] < min_separation {
            current.right = next.right;
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> Series {
        Series::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
            vec![0.0, 0.0, 5.0, 9.0, 5.0, 0.0, 0.0, 6.0, 6.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_threshold_above_max_yields_nothing() {
        let s = sample_series();
        assert!(find_regions(&s, 10.0, 1.5).is_empty());
        assert!(find_regions_pointwise(&s, 10.0, 1.5).is_empty());
    }

    #[test]
    fn test_two_separate_regions() {
        let s = sample_series();
        let regions = find_regions(&s, 4.0, 1.5);
        // gap x[7] - x[4] = 3 >= 1.5, no merge
        assert_eq!(
            regions,
            vec![Region { left: 2, right: 4 }, Region { left: 7, right: 8 }]
        );
    }

    #[test]
    fn test_merge_when_gap_below_separation() {
        let s = sample_series();
        let regions = find_regions(&s, 4.0, 4.0);
        // gap x[7] - x[4] = 3 < 4, merged
        assert_eq!(regions, vec![Region { left: 2, right: 8 }]);
    }

    #[test]
    fn test_tie_on_separation_does_not_merge() {
        let s = sample_series();
        // gap is exactly 3.0; strict < means no merge
        let regions = find_regions(&s, 4.0, 3.0);
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn test_non_positive_separation_never_merges() {
        let s = sample_series();
        for sep in [0.0, -1.0] {
            let regions = find_regions(&s, 4.0, sep);
            assert_eq!(regions.len(), 2);
        }
    }

    #[test]
    fn test_zero_separation_boundary_equal_x_does_not_merge() {
        // Two runs whose boundary samples share the same x: gap = 0,
        // and 0 < 0 is false, so they stay separate.
        let s = Series::new(
            vec![0.0, 1.0, 1.0, 2.0],
            vec![5.0, 0.0, 5.0, 5.0],
        )
        .unwrap();
        let regions = find_regions(&s, 4.0, 0.0);
        assert_eq!(
            regions,
            vec![Region { left: 0, right: 0 }, Region { left: 2, right: 3 }]
        );
    }

    #[test]
    fn test_run_touching_series_edges() {
        let s = Series::new(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![5.0, 5.0, 0.0, 5.0],
        )
        .unwrap();
        let regions = find_regions(&s, 4.0, 0.5);
        assert_eq!(
            regions,
            vec![Region { left: 0, right: 1 }, Region { left: 3, right: 3 }]
        );
    }

    #[test]
    fn test_all_samples_above_threshold() {
        let s = Series::new(vec![0.0, 1.0, 2.0], vec![5.0, 6.0, 7.0]).unwrap();
        let regions = find_regions(&s, 4.0, 0.5);
        assert_eq!(regions, vec![Region { left: 0, right: 2 }]);
    }

    #[test]
    fn test_regions_disjoint_and_sorted() {
        let s = sample_series();
        let regions = find_regions(&s, 4.0, 1.5);
        for pair in regions.windows(2) {
            assert!(pair[0].right < pair[1].left);
        }
    }

    #[test]
    fn test_pointwise_splits_sparse_run() {
        // Contiguous above-threshold samples spaced 1.0 apart: with a
        // minimum separation of 1.0 the pointwise variant keeps them as
        // single-sample regions, the run variant keeps one region.
        let s = sample_series();
        let pointwise = find_regions_pointwise(&s, 4.0, 1.0);
        assert_eq!(pointwise.len(), 5);
        assert!(pointwise.iter().all(|r| r.left == r.right));

        let runs = find_regions(&s, 4.0, 1.0);
        assert_eq!(runs.len(), 2);
    }

    #[test]
    fn test_pointwise_matches_runs_for_tight_spacing() {
        let s = sample_series();
        let a = find_regions(&s, 4.0, 1.5);
        let b = find_regions_pointwise(&s, 4.0, 1.5);
        assert_eq!(a, b);
    }
}
