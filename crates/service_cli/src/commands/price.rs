//! Price command implementation
//!
//! Estimates a single option premium with premia_pricer.

use premia_pricer::{PremiumEstimate, PremiumEstimator};
use tracing::info;

use crate::{CliError, Result};

/// Run the price command
pub fn run(
    spot: f64,
    strike: f64,
    volatility: f64,
    expiry: f64,
    option_type: &str,
    format: &str,
) -> Result<()> {
    info!("Starting pricing...");
    info!("  Spot: {}", spot);
    info!("  Strike: {}", strike);
    info!("  Volatility: {}", volatility);
    info!("  Expiry: {}", expiry);
    info!("  Option type: {}", option_type);

    // Reject the format before doing any work
    if !matches!(format, "table" | "json") {
        return Err(unknown_format(format));
    }

    let estimator = PremiumEstimator::default();
    let estimate = estimator.estimate_str(spot, strike, volatility, expiry, option_type)?;

    println!("{}", render(&estimate, format)?);

    info!("Pricing complete");
    Ok(())
}

fn unknown_format(format: &str) -> CliError {
    CliError::InvalidArgument(format!(
        "Unknown format: {}. Supported: json, table",
        format
    ))
}

/// Format an estimate for output.
pub fn render(estimate: &PremiumEstimate, format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(estimate)?),
        "table" => Ok(table(estimate)),
        other => Err(unknown_format(other)),
    }
}

fn table(estimate: &PremiumEstimate) -> String {
    let rows = [
        ("Option type", estimate.quote.option_type.to_string()),
        ("Spot", format!("{:.4}", estimate.quote.spot)),
        ("Strike", format!("{:.4}", estimate.quote.strike)),
        ("Volatility", format!("{:.4}", estimate.quote.volatility)),
        ("Expiry (y)", format!("{:.4}", estimate.quote.time_to_expiry)),
        ("Moneyness", format!("{:.4}", estimate.moneyness)),
        ("Bucket", estimate.bucket.label().to_string()),
        ("Intrinsic", format!("{:.4}", estimate.intrinsic)),
        ("Time value", format!("{:.4}", estimate.time_value)),
        ("Adjustment", format!("{:.2}", estimate.adjustment)),
        ("Premium", format!("{:.4}", estimate.premium)),
    ];

    let mut out = String::new();
    out.push_str("┌──────────────┬──────────────────────┐\n");
    for (label, value) in rows {
        out.push_str(&format!("│ {:<12} │ {:>20} │\n", label, value));
    }
    out.push_str("└──────────────┴──────────────────────┘");
    out
}
