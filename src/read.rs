//! Reading sampled series from numeric text tables.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PeakScanError, Result};
use crate::series::Series;

/// Load a two-column series from a whitespace-delimited numeric table.
///
/// Comma-delimited files are accepted as well. Blank lines and lines
/// starting with `#` or `//` are skipped, as is a leading header line
/// that does not parse as numbers. `col_x` and `col_y` are 0-based
/// column indices into each data row.
///
/// # Errors
/// * [`PeakScanError::FileOperation`] if the file cannot be opened or read
/// * [`PeakScanError::ColumnOutOfRange`] if a data row is too short
/// * [`PeakScanError::TableParse`] if a selected field is not a number
/// * [`PeakScanError::NoData`] if no data rows remain after skipping
pub fn load_table(path: &Path, col_x: usize, col_y: usize) -> Result<Series> {
    let file = File::open(path).map_err(|e| PeakScanError::FileOperation {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let reader = BufReader::new(file);

    let mut x_values = Vec::new();
    let mut y_values = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| PeakScanError::FileOperation {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        // Handle both comma and whitespace separation
        let parts: Vec<&str> = if line.contains(',') {
            line.split(',').map(|s| s.trim()).collect()
        } else {
            line.split_whitespace().collect()
        };

        // Tolerate one non-numeric header line before the data
        if x_values.is_empty() && parts.iter().all(|p| p.parse::<f64>().is_err()) {
            continue;
        }

        let needed = col_x.max(col_y);
        if parts.len() <= needed {
            return Err(PeakScanError::ColumnOutOfRange {
                line: line_idx + 1,
                column: needed,
                available: parts.len(),
            });
        }

        let parse = |col: usize| -> Result<f64> {
            parts[col].parse::<f64>().map_err(|_| PeakScanError::TableParse {
                path: path.display().to_string(),
                line: line_idx + 1,
                message: format!("'{}' is not a number", parts[col]),
            })
        };
        x_values.push(parse(col_x)?);
        y_values.push(parse(col_y)?);
    }

    if x_values.is_empty() {
        return Err(PeakScanError::NoData {
            path: path.display().to_string(),
        });
    }

    Series::new(x_values, y_values)
}
