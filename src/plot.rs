//! Plotly visualization of a series and its detected peaks.
//!
//! Read-only view: the plot is built from the series, the threshold and
//! the finished reports, and feeds nothing back into the analysis.

use std::path::Path;

use plotly::common::{Anchor, DashType, Mode};
use plotly::layout::Annotation;
use plotly::{Layout, Plot, Scatter};

use crate::analyze::valid_reports;
use crate::refine::PeakReport;
use crate::series::Series;

/// Build a plot of the raw signal with a dashed horizontal threshold
/// marker, one marker per valid peak maximum and a small annotation with
/// the peak's coordinates.
pub fn plot_peaks(
    series: &Series,
    reports: &[PeakReport],
    threshold: f64,
    title: &str,
) -> Plot {
    let mut plot = Plot::new();

    let signal_trace = Scatter::new(series.x.to_vec(), series.y.to_vec())
        .mode(Mode::Lines)
        .name("signal")
        .line(plotly::common::Line::new().color("#1f77b4").width(1.0));
    plot.add_trace(signal_trace);

    // Horizontal threshold marker across the full x range
    let threshold_trace = Scatter::new(
        vec![series.x[0], series.x[series.len() - 1]],
        vec![threshold, threshold],
    )
    .mode(Mode::Lines)
    .name(format!("threshold = {threshold:.4}"))
    .line(
        plotly::common::Line::new()
            .color("#d62728")
            .width(1.0)
            .dash(DashType::Dash),
    );
    plot.add_trace(threshold_trace);

    let max_x: Vec<f64> = valid_reports(reports).map(|r| r.x_max).collect();
    let max_y: Vec<f64> = valid_reports(reports).map(|r| r.y_max).collect();
    if !max_x.is_empty() {
        let maxima_trace = Scatter::new(max_x, max_y)
            .mode(Mode::Markers)
            .name("peak maxima")
            .marker(plotly::common::Marker::new().color("#d62728").size(8));
        plot.add_trace(maxima_trace);
    }

    let mut layout = Layout::new()
        .title(title.to_string())
        .x_axis(plotly::layout::Axis::new().title("x".to_string()))
        .y_axis(plotly::layout::Axis::new().title("y".to_string()));

    for (i, r) in valid_reports(reports).enumerate() {
        layout.add_annotation(
            Annotation::new()
                .x(r.x_max)
                .y(r.y_max)
                .x_anchor(Anchor::Left)
                .y_anchor(Anchor::Bottom)
                .text(format!(
                    "Peak {}<br>X: {:.2}<br>Y: {:.2}",
                    i + 1,
                    r.x_max,
                    r.y_max
                ))
                .show_arrow(false),
        );
    }

    plot.set_layout(layout);
    plot
}

/// Write a plot to a standalone HTML file.
pub fn save_plot_html(plot: &Plot, path: &Path) {
    plot.write_html(path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::regions::find_regions;

    #[test]
    fn test_plot_contains_signal_and_maxima() {
        let s = Series::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.0, 5.0, 9.0, 5.0, 0.0],
        )
        .unwrap();
        let regions = find_regions(&s, 4.0, 0.5);
        let reports = analyze(&s, &regions);
        let plot = plot_peaks(&s, &reports, 4.0, "test");
        let json = plot.to_json();
        assert!(json.contains("signal"));
        assert!(json.contains("peak maxima"));
        assert!(json.contains("Peak 1"));
    }

    #[test]
    fn test_plot_without_valid_peaks_has_no_marker_trace() {
        let s = Series::new(vec![0.0, 1.0], vec![0.0, 0.0]).unwrap();
        let plot = plot_peaks(&s, &[], 4.0, "empty");
        let json = plot.to_json();
        assert!(json.contains("signal"));
        assert!(!json.contains("peak maxima"));
    }
}
