//! Rendering and persistence of peak reports.
//!
//! Valid reports are exported as a flat whitespace-delimited numeric
//! table with a commented header line, four-decimal fixed formatting.
//! The same format is re-parseable with [`read_reports`], and the full
//! report sequence (invalid entries included) can be dumped as JSON.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::analyze::valid_reports;
use crate::error::{PeakScanError, Result};
use crate::refine::PeakReport;

/// Header written above the exported table. The leading `# ` keeps the
/// line out of the way of comment-aware readers, including
/// [`crate::read::load_table`].
pub const TABLE_HEADER: &str = "# x_beginning x_end x_max y_max length area";

/// Render valid reports as a fixed-width console table.
///
/// Columns match the exported file: peak index, refined boundaries,
/// maximum coordinates, length and area, four decimals throughout.
pub fn format_report_table(reports: &[PeakReport]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<12} {:<12} {:<12} {:<12} {:<12} {:<12}\n",
        "Peak", "X Start", "X End", "X Max", "Y Max", "Length", "Area"
    ));
    out.push_str(&"-".repeat(90));
    out.push('\n');
    for (i, r) in valid_reports(reports).enumerate() {
        out.push_str(&format!(
            "{:<6} {:<12.4} {:<12.4} {:<12.4} {:<12.4} {:<12.4} {:<12.4}\n",
            i + 1,
            r.x_beginning,
            r.x_end,
            r.x_max,
            r.y_max,
            r.length,
            r.area
        ));
    }
    out
}

/// Write the valid subset of `reports` to `path` as a numeric table.
pub fn save_reports(path: &Path, reports: &[PeakReport]) -> Result<()> {
    let mut content = String::from(TABLE_HEADER);
    content.push('\n');
    for r in valid_reports(reports) {
        content.push_str(&format!(
            "{:.4} {:.4} {:.4} {:.4} {:.4} {:.4}\n",
            r.x_beginning, r.x_end, r.x_max, r.y_max, r.length, r.area
        ));
    }
    fs::write(path, content).map_err(|e| PeakScanError::FileOperation {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Re-parse a table written by [`save_reports`].
///
/// Every parsed report is valid by construction (only the valid subset
/// is ever exported). The header is accepted with or without the `# `
/// prefix.
pub fn read_reports(path: &Path) -> Result<Vec<PeakReport>> {
    let file = fs::File::open(path).map_err(|e| PeakScanError::FileOperation {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let reader = BufReader::new(file);
    let mut reports = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| PeakScanError::FileOperation {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("x_beginning") {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(PeakScanError::ColumnOutOfRange {
                line: line_idx + 1,
                column: 5,
                available: fields.len(),
            });
        }
        let mut values = [0.0_f64; 6];
        for (v, field) in values.iter_mut().zip(fields.iter()) {
            *v = field.parse().map_err(|_| PeakScanError::TableParse {
                path: path.display().to_string(),
                line: line_idx + 1,
                message: format!("'{field}' is not a number"),
            })?;
        }
        reports.push(PeakReport {
            x_beginning: values[0],
            x_end: values[1],
            x_max: values[2],
            y_max: values[3],
            length: values[4],
            area: values[5],
            valid: true,
            failure: None,
        });
    }
    Ok(reports)
}

/// Dump the full report sequence (invalid entries included) as pretty JSON.
pub fn save_reports_json(path: &Path, reports: &[PeakReport]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(reports).map_err(|e| PeakScanError::FileOperation {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    fs::write(path, json).map_err(|e| PeakScanError::FileOperation {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
