//! End-to-end pipeline tests: table file -> detection -> refinement ->
//! export -> re-parse.

use tempfile::TempDir;

use peakscan::{
    analyze, find_regions, load_table, read_reports, save_reports, valid_reports, Series,
};

const TOL: f64 = 1e-4;

fn write_signal_table(dir: &TempDir) -> std::path::PathBuf {
    let mut content = String::from("# F A\n");
    let y = [0.0, 0.0, 5.0, 9.0, 5.0, 0.0, 0.0, 6.0, 6.5, 0.0];
    for (i, v) in y.iter().enumerate() {
        content.push_str(&format!("{:.1} {:.1}\n", i as f64, v));
    }
    let path = dir.path().join("signal.txt");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_full_pipeline_with_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = write_signal_table(&dir);

    let series = load_table(&input, 0, 1).unwrap();
    assert_eq!(series.len(), 10);

    let regions = find_regions(&series, 4.0, 1.5);
    assert_eq!(regions.len(), 2);

    let reports = analyze(&series, &regions);
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.valid));

    let output = dir.path().join("peaks.txt");
    save_reports(&output, &reports).unwrap();
    let parsed = read_reports(&output).unwrap();

    assert_eq!(parsed.len(), valid_reports(&reports).count());
    for (orig, round) in valid_reports(&reports).zip(parsed.iter()) {
        assert!((orig.x_beginning - round.x_beginning).abs() < TOL);
        assert!((orig.x_end - round.x_end).abs() < TOL);
        assert!((orig.x_max - round.x_max).abs() < TOL);
        assert!((orig.y_max - round.y_max).abs() < TOL);
        assert!((orig.length - round.length).abs() < TOL);
        assert!((orig.area - round.area).abs() < TOL);
    }
}

#[test]
fn test_merged_scenario_through_pipeline() {
    let dir = TempDir::new().unwrap();
    let input = write_signal_table(&dir);
    let series = load_table(&input, 0, 1).unwrap();

    // With a wide minimum separation both excursions merge into one
    // region: the gap x[7] - x[4] = 3 is below 4.
    let regions = find_regions(&series, 4.0, 4.0);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].left, 2);
    assert_eq!(regions[0].right, 8);

    let reports = analyze(&series, &regions);
    let report = &reports[0];
    assert!(report.valid);
    assert!((report.x_max - 3.0).abs() < TOL);
    assert!((report.y_max - 9.0).abs() < TOL);
    // The maximum is taken over the raw span and can sit left of the
    // refined beginning.
    assert!(report.x_end >= report.x_beginning);
    assert!(report.length >= 0.0);
}

#[test]
fn test_threshold_above_signal_yields_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_signal_table(&dir);
    let series = load_table(&input, 0, 1).unwrap();

    let regions = find_regions(&series, series.y_max() + 1.0, 1.5);
    assert!(regions.is_empty());
    assert!(analyze(&series, &regions).is_empty());
}

#[test]
fn test_isolated_sample_reported_invalid() {
    let series = Series::new(
        vec![0.0, 10.0, 20.0, 30.0, 40.0],
        vec![0.0, 0.0, 7.0, 0.0, 0.0],
    )
    .unwrap();
    let regions = find_regions(&series, 4.0, 1.0);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].left, regions[0].right);

    let reports = analyze(&series, &regions);
    assert!(!reports[0].valid);
    assert_eq!(reports[0].length, 0.0);
    assert_eq!(reports[0].area, 0.0);
    assert_eq!(valid_reports(&reports).count(), 0);
}
