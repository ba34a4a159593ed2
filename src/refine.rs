//! Derivative-based boundary refinement for detected regions.
//!
//! The raw threshold-crossing span of a region overshoots the actual
//! feature: samples just above the threshold on both flanks belong to the
//! tails, not the peak. Refinement narrows the span by looking at the
//! local derivative of the signal and picking the strongest edges as the
//! peak boundaries.

use ndarray::{s, Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::regions::Region;
use crate::series::Series;

/// Fraction of the peak absolute derivative used as the edge-detection
/// height inside a region. A derivative local maximum must reach this
/// fraction of the strongest slope in the region to count as an edge.
pub const EDGE_SLOPE_FRACTION: f64 = 0.1;

/// Why refinement of a region was not meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// The region spans exactly one sample; there is no width to refine.
    SingleSample,
    /// The derivative contains NaN or infinity, typically caused by
    /// duplicate x values inside the span.
    NonFiniteDerivative,
    /// The span is perfectly flat; no edge exists to anchor a boundary.
    FlatDerivative,
}

/// Immutable result record for one region.
///
/// `x_max`/`y_max` are taken over the region's *raw* span, before the
/// boundaries are narrowed. A valid report therefore does not guarantee
/// `x_beginning <= x_max <= x_end`: when the left boundary moves past the
/// maximum of a merged region, `x_max` can sit outside the refined span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakReport {
    /// Refined left boundary (x-coordinate).
    pub x_beginning: f64,
    /// Refined right boundary (x-coordinate).
    pub x_end: f64,
    /// Abscissa of the largest sample within the raw span.
    pub x_max: f64,
    /// Largest ordinate within the raw span (first index wins on ties).
    pub y_max: f64,
    /// `x_end - x_beginning`.
    pub length: f64,
    /// Trapezoidal integral of y over the refined span.
    pub area: f64,
    /// Whether refinement produced meaningful boundaries.
    pub valid: bool,
    /// Diagnostic reason when `valid` is false. Informational only;
    /// callers should branch on `valid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureReason>,
}

/// Refine one region into a [`PeakReport`].
///
/// Never fails: degenerate regions (single sample, flat span, duplicate x
/// inside the span) yield a report with `valid = false`, the raw span
/// endpoints as best-effort boundaries and a [`FailureReason`].
///
/// Boundary selection is asymmetric by design, inherited from the
/// original tool: the left boundary moves to the first derivative edge as
/// soon as one candidate exists, while the right boundary only moves when
/// at least two candidates are found and otherwise stays at the raw span
/// edge. Callers relying on tight right boundaries should be aware that a
/// single clear trailing edge is not enough to narrow them.
pub fn refine(series: &Series, region: Region) -> PeakReport {
    if region.left == region.right {
        return single_sample_report(series, region);
    }

    let x_peak = series.x.slice(s![region.left..=region.right]);
    let y_peak = series.y.slice(s![region.left..=region.right]);
    let n = x_peak.len();

    let (max_idx, y_max) = argmax_first(&y_peak);
    let x_max = x_peak[max_idx];

    let derivative = numerical_derivative(&x_peak, &y_peak);
    if derivative.iter().any(|d| !d.is_finite()) {
        return degenerate_report(series, region, FailureReason::NonFiniteDerivative);
    }
    let max_slope = derivative.iter().fold(0.0_f64, |m, d| m.max(d.abs()));
    if max_slope == 0.0 {
        return degenerate_report(series, region, FailureReason::FlatDerivative);
    }

    let edge_height = EDGE_SLOPE_FRACTION * max_slope;
    let edges = derivative_edges(&derivative, edge_height);

    let left_boundary = edges.first().copied().unwrap_or(0);
    let right_boundary = if edges.len() >= 2 {
        edges[edges.len() - 1]
    } else {
        n - 1
    };

    let x_beginning = x_peak[left_boundary];
    let x_end = x_peak[right_boundary];
    let area = trapezoid(
        &x_peak.slice(s![left_boundary..=right_boundary]),
        &y_peak.slice(s![left_boundary..=right_boundary]),
    );

    PeakReport {
        x_beginning,
        x_end,
        x_max,
        y_max,
        length: x_end - x_beginning,
        area,
        valid: true,
        failure: None,
    }
}

fn single_sample_report(series: &Series, region: Region) -> PeakReport {
    let x = series.x[region.left];
    PeakReport {
        x_beginning: x,
        x_end: x,
        x_max: x,
        y_max: series.y[region.left],
        length: 0.0,
        area: 0.0,
        valid: false,
        failure: Some(FailureReason::SingleSample),
    }
}

fn degenerate_report(series: &Series, region: Region, reason: FailureReason) -> PeakReport {
    let y_peak = series.y.slice(s![region.left..=region.right]);
    let (max_idx, y_max) = argmax_first(&y_peak);
    let x_beginning = series.x[region.left];
    let x_end = series.x[region.right];
    PeakReport {
        x_beginning,
        x_end,
        x_max: series.x[region.left + max_idx],
        y_max,
        length: x_end - x_beginning,
        area: 0.0,
        valid: false,
        failure: Some(reason),
    }
}

/// Numerical derivative dy/dx: one-sided at the span ends, central
/// differences in the interior.
fn numerical_derivative(x: &ArrayView1<f64>, y: &ArrayView1<f64>) -> Array1<f64> {
    let n = x.len();
    let mut d = Array1::zeros(n);
    d[0] = (y[1] - y[0]) / (x[1] - x[0]);
    for i in 1..n - 1 {
        d[i] = (y[i + 1] - y[i - 1]) / (x[i + 1] - x[i - 1]);
    }
    d[n - 1] = (y[n - 1] - y[n - 2]) / (x[n - 1] - x[n - 2]);
    d
}

/// Indices where |d| is a strict local maximum at or above `height`.
fn derivative_edges(derivative: &Array1<f64>, height: f64) -> Vec<usize> {
    let n = derivative.len();
    let mut edges = Vec::new();
    for i in 1..n.saturating_sub(1) {
        let mag = derivative[i].abs();
        if mag > derivative[i - 1].abs() && mag > derivative[i + 1].abs() && mag >= height {
            edges.push(i);
        }
    }
    edges
}

/// Index and value of the largest sample; the first index wins on ties.
fn argmax_first(y: &ArrayView1<f64>) -> (usize, f64) {
    let mut best = 0;
    for i in 1..y.len() {
        if y[i] > y[best] {
            best = i;
        }
    }
    (best, y[best])
}

/// Trapezoidal integral of y over x.
fn trapezoid(x: &ArrayView1<f64>, y: &ArrayView1<f64>) -> f64 {
    let mut area = 0.0;
    for i in 1..x.len() {
        area += (y[i] + y[i - 1]) * (x[i] - x[i - 1]) / 2.0;
    }
    area
}
