//! Command-line driver: load a table, detect and refine peaks, report.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use peakscan::cli::{Args, DetectionMode};
use peakscan::{
    analyze, analyze_par, find_regions, find_regions_pointwise, format_report_table, plot_peaks,
    save_plot_html, save_reports, save_reports_json, valid_reports,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let series = peakscan::read::load_table(&args.input, args.col_x, args.col_y)
        .with_context(|| format!("loading '{}'", args.input.display()))?;
    info!(
        "loaded {} samples from '{}'",
        series.len(),
        args.input.display()
    );

    let regions = match args.mode {
        DetectionMode::Regions => find_regions(&series, args.threshold, args.min_width),
        DetectionMode::Pointwise => {
            find_regions_pointwise(&series, args.threshold, args.min_width)
        }
    };
    if regions.is_empty() {
        info!("no peaks found above threshold {}", args.threshold);
        return Ok(());
    }
    info!(
        "{} region(s) above threshold {} (mode: {})",
        regions.len(),
        args.threshold,
        args.mode
    );

    let reports = if args.parallel {
        analyze_par(&series, &regions)
    } else {
        analyze(&series, &regions)
    };
    let invalid = reports.len() - valid_reports(&reports).count();
    if invalid > 0 {
        warn!("{invalid} region(s) could not be refined and are excluded from the table");
    }

    println!("\nPEAK DETECTION RESULTS");
    print!("{}", format_report_table(&reports));

    if let Some(path) = &args.output {
        save_reports(path, &reports)
            .with_context(|| format!("saving results to '{}'", path.display()))?;
        info!("results saved to '{}'", path.display());
    }
    if let Some(path) = &args.json {
        save_reports_json(path, &reports)
            .with_context(|| format!("saving JSON to '{}'", path.display()))?;
        info!("JSON report saved to '{}'", path.display());
    }
    if let Some(path) = &args.plot {
        let title = format!("Peak Detection Analysis: {}", args.input.display());
        let plot = plot_peaks(&series, &reports, args.threshold, &title);
        save_plot_html(&plot, path);
        info!("plot saved to '{}'", path.display());
    }

    Ok(())
}
