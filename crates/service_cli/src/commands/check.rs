//! Check command implementation
//!
//! Prints the effective configuration after file and environment overrides.

use std::path::Path;

use infra_config::AppConfig;
use tracing::info;

use crate::Result;

/// Run the check command
pub fn run(config: &AppConfig, config_path: &str) -> Result<()> {
    info!("Checking configuration...");

    let source = if Path::new(config_path).exists() {
        config_path.to_string()
    } else {
        format!("{} (not found, using defaults)", config_path)
    };

    for line in describe(config, &source) {
        println!("{}", line);
    }

    info!("Configuration OK");
    Ok(())
}

fn describe(config: &AppConfig, source: &str) -> Vec<String> {
    let chart = &config.chart;
    let font = chart
        .font_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled DejaVu Sans".to_string());

    vec![
        format!("Config file:       {}", source),
        format!("Charts directory:  {}", config.charts_dir.display()),
        format!("Log level:         {}", config.log_level),
        format!("Chart size:        {}x{}", chart.width, chart.height),
        format!("Font size:         {}", chart.font_size),
        format!("Font:              {}", font),
        format!("Level opacity:     {}", chart.level_opacity),
    ]
}
