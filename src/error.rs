//! Error types for the peakscan crate.
//!
//! This module provides a unified error type for all peakscan operations.
//! Per-region refinement failures are not errors: they are reported through
//! [`crate::refine::PeakReport::valid`] so that one degenerate region never
//! aborts a batch. Only structurally invalid input reaches this type.

use thiserror::Error;

/// Error type for peakscan operations.
#[derive(Debug, Error)]
pub enum PeakScanError {
    /// The x and y sequences of a series have different lengths.
    #[error("series shape mismatch: x has {x_len} samples, y has {y_len}")]
    ShapeMismatch {
        /// Number of abscissa samples.
        x_len: usize,
        /// Number of ordinate samples.
        y_len: usize,
    },

    /// A series must contain at least one sample.
    #[error("series is empty")]
    EmptySeries,

    /// A data line does not carry the requested column.
    #[error("line {line}: column {column} requested but only {available} columns present")]
    ColumnOutOfRange {
        /// 1-based line number in the input file.
        line: usize,
        /// Requested 0-based column index.
        column: usize,
        /// Number of columns actually present on the line.
        available: usize,
    },

    /// A field in the input table could not be parsed as a number.
    #[error("failed to parse '{path}' at line {line}: {message}")]
    TableParse {
        /// Path to the input file.
        path: String,
        /// 1-based line number where parsing failed.
        line: usize,
        /// Description of the failure.
        message: String,
    },

    /// A file operation failed (open, read, write).
    #[error("file operation failed for '{path}': {message}")]
    FileOperation {
        /// Path to the file.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// A file contained no usable data rows.
    #[error("no numeric data found in '{path}'")]
    NoData {
        /// Path to the file.
        path: String,
    },
}

/// Convenience result type for peakscan operations.
pub type Result<T> = std::result::Result<T, PeakScanError>;
