//! Sampled series data model.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{PeakScanError, Result};

/// A sampled one-dimensional signal: ordered abscissa values and the
/// matching ordinate samples.
///
/// Both arrays always have the same, nonzero length; [`Series::new`]
/// enforces this. The abscissa is expected to be increasing; the
/// detection and refinement code only reads the series, never reorders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    /// Abscissa samples (e.g. frequency in uHz, or time).
    pub x: Array1<f64>,
    /// Ordinate samples (e.g. amplitude).
    pub y: Array1<f64>,
}

impl Series {
    /// Build a series from two equal-length sample vectors.
    ///
    /// # Errors
    /// * [`PeakScanError::ShapeMismatch`] if the lengths differ
    /// * [`PeakScanError::EmptySeries`] if both are empty
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(PeakScanError::ShapeMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(PeakScanError::EmptySeries);
        }
        Ok(Series {
            x: Array1::from_vec(x),
            y: Array1::from_vec(y),
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed series; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Largest ordinate value in the series.
    pub fn y_max(&self) -> f64 {
        self.y.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}
