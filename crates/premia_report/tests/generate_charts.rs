//! End-to-end chart generation against a temporary directory.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use infra_config::ChartSettings;
use premia_core::{MemoryDiagnostics, Severity};
use premia_report::{ChartData, ChartKind, ChartOutcome, ReportGenerator};

fn generator() -> (ReportGenerator, Arc<MemoryDiagnostics>) {
    let diagnostics = MemoryDiagnostics::shared();
    let settings = ChartSettings {
        width: 400,
        height: 240,
        ..ChartSettings::default()
    };
    (ReportGenerator::new(settings, diagnostics.clone()), diagnostics)
}

fn png_files(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect()
}

fn week() -> ChartData {
    ChartData::new(
        vec![
            "2024-03-04".into(),
            "2024-03-05".into(),
            "2024-03-06".into(),
            "2024-03-07".into(),
            "2024-03-08".into(),
        ],
        vec![170.1, 169.1, 169.0, 169.4, 170.7],
    )
}

#[test]
fn test_empty_input_yields_exactly_two_placeholders() {
    let (gen, diagnostics) = generator();
    let dir = tempfile::tempdir().unwrap();

    let report = gen.generate_charts("EMPTY", &ChartData::default(), dir.path());

    for kind in ChartKind::ALL {
        assert!(matches!(
            report.outcome(kind),
            ChartOutcome::Placeholder { .. }
        ));
    }
    assert_eq!(
        png_files(dir.path()),
        BTreeSet::from([
            "EMPTY_price_chart.png".to_string(),
            "EMPTY_support_resistance.png".to_string(),
        ])
    );
    assert!(diagnostics.contains(Severity::Warn, "Insufficient data for EMPTY charts"));
    assert_eq!(diagnostics.count(Severity::Error), 0);
}

#[test]
fn test_misaligned_lengths_yield_placeholders() {
    let (gen, _) = generator();
    let dir = tempfile::tempdir().unwrap();
    let data = ChartData::new(
        vec!["2024-01-02".into(), "2024-01-03".into(), "2024-01-04".into()],
        vec![1.0, 2.0],
    );

    let report = gen.generate_charts("SHORT", &data, dir.path());

    match &report.price {
        ChartOutcome::Placeholder { reason, .. } => {
            assert_eq!(reason, "3 dates but 2 close prices");
        }
        other => panic!("expected placeholder, got {other}"),
    }
    assert_eq!(png_files(dir.path()).len(), 2);
}

#[test]
fn test_repeated_calls_overwrite_and_release_canvases() {
    let (gen, _) = generator();
    let dir = tempfile::tempdir().unwrap();
    let data = week().with_levels(vec![168.5], vec![171.0]);

    let first = gen.generate_charts("AAPL", &data, dir.path());
    let files_after_first = png_files(dir.path());
    let second = gen.generate_charts("AAPL", &data, dir.path());

    assert_eq!(first, second);
    assert_eq!(png_files(dir.path()), files_after_first);
    assert_eq!(gen.canvases().live(), 0);
    assert!(gen.canvases().opened() >= 2);
}

#[test]
fn test_price_only_skips_support_resistance() {
    let (gen, diagnostics) = generator();
    let dir = tempfile::tempdir().unwrap();

    let report = gen.generate_charts("MSFT", &week(), dir.path());

    assert!(report.price.is_rendered());
    assert_eq!(report.support_resistance, ChartOutcome::Skipped);
    assert!(dir.path().join("MSFT_price_chart.png").is_file());
    assert!(!dir.path().join("MSFT_support_resistance.png").exists());
    assert_eq!(diagnostics.count(Severity::Error), 0);
}

#[test]
fn test_levels_produce_both_charts() {
    let (gen, _) = generator();
    let dir = tempfile::tempdir().unwrap();
    let data = week().with_levels(vec![168.0, 168.8], vec![171.5]);

    let report = gen.generate_charts("SPY", &data, dir.path());

    assert!(report.price.is_rendered());
    assert!(report.support_resistance.is_rendered());
    for path in report.files() {
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }
}

#[test]
fn test_empty_level_list_skips_support_resistance() {
    let (gen, _) = generator();
    let dir = tempfile::tempdir().unwrap();
    let data = week().with_levels(vec![], vec![171.5]);

    let report = gen.generate_charts("QQQ", &data, dir.path());

    assert_eq!(report.support_resistance, ChartOutcome::Skipped);
    assert_eq!(report.files().len(), 1);
}

#[test]
fn test_single_observation_renders() {
    let (gen, _) = generator();
    let dir = tempfile::tempdir().unwrap();
    let data = ChartData::new(vec!["2024-05-01".into()], vec![42.0]);

    let report = gen.generate_charts("ONE", &data, dir.path());

    assert!(report.price.is_rendered());
}

#[test]
fn test_invalid_date_is_logged_and_reported() {
    let (gen, diagnostics) = generator();
    let dir = tempfile::tempdir().unwrap();
    let data = ChartData::new(vec!["2024-02-30".into()], vec![10.0]);

    let report = gen.generate_charts("FEB", &data, dir.path());

    assert!(report.has_failures());
    assert!(report.files().is_empty());
    assert!(diagnostics.contains(Severity::Error, "FEB"));
    assert_eq!(gen.canvases().live(), 0);
}

#[test]
fn test_non_finite_close_is_reported() {
    let (gen, diagnostics) = generator();
    let dir = tempfile::tempdir().unwrap();
    let data = ChartData::new(
        vec!["2024-01-02".into(), "2024-01-03".into()],
        vec![1.0, f64::NAN],
    );

    let report = gen.generate_charts("NAN", &data, dir.path());

    assert!(report.price.is_failed());
    assert!(diagnostics.contains(Severity::Error, "not finite"));
}

#[test]
fn test_json_bundle_round_trip_through_generator() {
    let (gen, _) = generator();
    let dir = tempfile::tempdir().unwrap();
    let data: ChartData = serde_json::from_str(
        r#"{
            "dates": ["2024-01-02", "2024-01-03", "2024-01-04"],
            "close": [100.0, 101.0, 99.5],
            "support_resistance": {
                "support_levels": [99.0],
                "resistance_levels": [101.5]
            }
        }"#,
    )
    .unwrap();

    let report = gen.generate_charts("JSON", &data, dir.path());

    assert_eq!(report.files().len(), 2);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["price"]["status"], "rendered");
    assert_eq!(json["support_resistance"]["status"], "rendered");
}

#[test]
fn test_overflowing_levels_fail_without_hanging() {
    let (gen, diagnostics) = generator();
    let dir = tempfile::tempdir().unwrap();
    let data = ChartData::new(
        vec!["2024-01-02".into(), "2024-01-03".into()],
        vec![100.0, 101.0],
    )
    .with_levels(vec![-1e308], vec![1e308]);

    let report = gen.generate_charts("L", &data, dir.path());

    assert!(report.price.is_rendered());
    assert!(report.support_resistance.is_failed());
    assert!(diagnostics.contains(Severity::Error, "cannot be plotted"));
    assert_eq!(gen.canvases().live(), 0);
}

#[test]
fn test_extreme_closes_fail_without_hanging() {
    let (gen, diagnostics) = generator();
    let dir = tempfile::tempdir().unwrap();
    let data = ChartData::new(
        vec!["2024-01-02".into(), "2024-01-03".into()],
        vec![f64::MAX, -f64::MAX],
    );

    let report = gen.generate_charts("X", &data, dir.path());

    assert!(report.price.is_failed());
    assert!(report.files().is_empty());
    assert!(diagnostics.contains(Severity::Error, "X"));
}
