//! Charts command implementation
//!
//! Renders price and support/resistance charts for each symbol in a JSON
//! file of the form `{"AAPL": {"dates": [...], "close": [...]}, ...}`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use infra_config::AppConfig;
use premia_core::TracingDiagnostics;
use premia_report::{ChartData, ChartKind, ChartReport, ReportGenerator};
use tracing::{info, warn};

use crate::{CliError, Result};

/// Run the charts command
pub fn run(
    config: &AppConfig,
    input: &str,
    symbol: Option<&str>,
    output_dir: Option<&str>,
) -> Result<()> {
    let charts_dir = output_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config.charts_dir.clone());

    info!("Generating charts...");
    info!("  Input: {}", input);
    info!("  Output directory: {}", charts_dir.display());

    let bundles = select(load_bundles(Path::new(input))?, symbol)?;
    if bundles.is_empty() {
        warn!("No symbols found in {}", input);
    }

    let generator = ReportGenerator::new(
        config.chart.clone(),
        TracingDiagnostics::shared("report_generator"),
    );

    let reports: Vec<ChartReport> = bundles
        .iter()
        .map(|(symbol, data)| generator.generate_charts(symbol, data, &charts_dir))
        .collect();

    for report in &reports {
        for line in summary(report) {
            println!("{}", line);
        }
    }

    let failures = failure_count(&reports);
    if failures > 0 {
        return Err(CliError::ChartFailures(failures));
    }

    info!("Chart generation complete");
    Ok(())
}

/// Read the symbol → chart data map from `path`.
pub fn load_bundles(path: &Path) -> Result<BTreeMap<String, ChartData>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn select(
    mut bundles: BTreeMap<String, ChartData>,
    symbol: Option<&str>,
) -> Result<BTreeMap<String, ChartData>> {
    match symbol {
        None => Ok(bundles),
        Some(symbol) => {
            let data = bundles.remove(symbol).ok_or_else(|| {
                CliError::InvalidArgument(format!("Symbol {} not present in input", symbol))
            })?;
            Ok(BTreeMap::from([(symbol.to_string(), data)]))
        }
    }
}

/// One line per chart: `SYMBOL  kind  outcome`.
pub fn summary(report: &ChartReport) -> Vec<String> {
    ChartKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "{:<8} {:<20} {}",
                report.symbol,
                kind.to_string(),
                report.outcome(*kind)
            )
        })
        .collect()
}

fn failure_count(reports: &[ChartReport]) -> usize {
    reports
        .iter()
        .flat_map(|r| ChartKind::ALL.map(|kind| r.outcome(kind).is_failed()))
        .filter(|failed| *failed)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const INPUT: &str = r#"{
        "AAPL": {
            "dates": ["2024-01-02", "2024-01-03"],
            "close": [185.6, 184.3],
            "support_resistance": {"support_levels": [183.0], "resistance_levels": [187.0]}
        },
        "EMPTY": {}
    }"#;

    fn input_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(INPUT.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_bundles() {
        let file = input_file();
        let bundles = load_bundles(file.path()).unwrap();
        assert_eq!(bundles.len(), 2);
        assert_eq!(bundles["AAPL"].close.len(), 2);
        assert!(bundles["EMPTY"].insufficiency().is_some());
    }

    #[test]
    fn test_missing_input() {
        let result = load_bundles(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_select_unknown_symbol() {
        let bundles = BTreeMap::from([("A".to_string(), ChartData::default())]);
        assert!(matches!(
            select(bundles, Some("B")),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_run_writes_all_symbols() {
        let file = input_file();
        let out = tempfile::tempdir().unwrap();

        run(
            &AppConfig::default(),
            file.path().to_str().unwrap(),
            None,
            out.path().to_str(),
        )
        .unwrap();

        assert!(out.path().join("AAPL_price_chart.png").is_file());
        assert!(out.path().join("AAPL_support_resistance.png").is_file());
        assert!(out.path().join("EMPTY_price_chart.png").is_file());
        assert!(out.path().join("EMPTY_support_resistance.png").is_file());
    }

    #[test]
    fn test_summary_has_line_per_kind() {
        let file = input_file();
        let out = tempfile::tempdir().unwrap();
        let bundles = load_bundles(file.path()).unwrap();
        let generator = ReportGenerator::default();

        let report = generator.generate_charts("EMPTY", &bundles["EMPTY"], out.path());
        let lines = summary(&report);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("placeholder"));
    }
}
