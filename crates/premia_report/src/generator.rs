//! Report generator component.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use infra_config::ChartSettings;
use premia_core::diagnostics::{Diagnostics, TracingDiagnostics};

use crate::canvas::CanvasTracker;
use crate::data::{ChartData, PriceSeries};
use crate::error::ChartError;
use crate::fonts;
use crate::kind::ChartKind;
use crate::outcome::{ChartOutcome, ChartReport};
use crate::render::Renderer;

/// Draws the price and support/resistance charts for a symbol.
///
/// `generate_charts` never panics or returns an error: every failure is
/// logged through the injected [`Diagnostics`] and reported in the returned
/// [`ChartReport`].
///
/// # Examples
/// ```no_run
/// use infra_config::ChartSettings;
/// use premia_core::TracingDiagnostics;
/// use premia_report::{ChartData, ReportGenerator};
///
/// let generator = ReportGenerator::new(ChartSettings::default(), TracingDiagnostics::shared("report"));
/// let data = ChartData::new(
///     vec!["2024-01-02".into(), "2024-01-03".into()],
///     vec![187.15, 184.25],
/// )
/// .with_levels(vec![180.0], vec![190.0]);
///
/// let report = generator.generate_charts("AAPL", &data, "charts");
/// assert!(report.price.is_rendered());
/// ```
pub struct ReportGenerator {
    settings: ChartSettings,
    diagnostics: Arc<dyn Diagnostics>,
    canvases: CanvasTracker,
    text: bool,
}

impl ReportGenerator {
    /// Create a generator and register the chart font.
    ///
    /// The configured `font_path` is used if it loads, otherwise the bundled
    /// font. The font registry is process-wide, so a `font_path` that differs
    /// from an earlier generator's is ignored with a warning.
    pub fn new(settings: ChartSettings, diagnostics: Arc<dyn Diagnostics>) -> Self {
        let preferred = settings.font_path.as_deref();
        let text = match fonts::ensure_registered(preferred) {
            Ok(source) => {
                if let (Some(wanted), false) = (preferred, source.honours(preferred)) {
                    diagnostics.warn(&format!(
                        "Chart font_path {} not used; chart text uses {}",
                        wanted.display(),
                        source
                    ));
                }
                true
            }
            Err(err) => {
                diagnostics.warn(&format!("Chart text disabled: {}", err));
                false
            }
        };

        diagnostics.info("ReportGenerator initialized");

        Self {
            settings,
            diagnostics,
            canvases: CanvasTracker::new(),
            text,
        }
    }

    /// Rendering settings in use.
    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Whether chart text (titles, labels, messages) is drawn.
    pub fn text_enabled(&self) -> bool {
        self.text
    }

    /// Canvas accounting; `live()` is zero whenever no call is in progress.
    pub fn canvases(&self) -> &CanvasTracker {
        &self.canvases
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer {
            settings: &self.settings,
            diagnostics: self.diagnostics.as_ref(),
            canvases: &self.canvases,
            text: self.text,
        }
    }

    /// Draw both charts for `symbol` into `charts_dir`.
    ///
    /// 1. `charts_dir` is created if missing.
    /// 2. Empty or misaligned `dates`/`close` produce one placeholder per
    ///    chart kind and nothing else.
    /// 3. Otherwise the price chart is drawn, and the support/resistance
    ///    chart too when both level lists are non-empty.
    pub fn generate_charts(
        &self,
        symbol: &str,
        data: &ChartData,
        charts_dir: impl AsRef<Path>,
    ) -> ChartReport {
        let charts_dir = charts_dir.as_ref();

        if let Err(source) = fs::create_dir_all(charts_dir) {
            let err = ChartError::CreateDir {
                path: charts_dir.to_path_buf(),
                source,
            };
            self.diagnostics
                .error(&format!("Error generating charts for {}: {}", symbol, err));
            return ChartReport::all_failed(symbol, &err.to_string());
        }

        if let Some(reason) = data.insufficiency() {
            self.diagnostics
                .warn(&format!("Insufficient data for {} charts ({})", symbol, reason));
            return self.placeholders(symbol, charts_dir, &reason);
        }

        let series = match PriceSeries::from_data(data) {
            Ok(series) => series,
            Err(err) => {
                self.diagnostics
                    .error(&format!("Error generating charts for {}: {}", symbol, err));
                return ChartReport::all_failed(symbol, &err.to_string());
            }
        };

        let renderer = self.renderer();

        let price = self.finish(
            symbol,
            ChartKind::Price,
            charts_dir,
            |path, title| renderer.series_chart(path, title, &series, None),
        );

        let support_resistance = match data.levels() {
            Some(levels) => self.finish(
                symbol,
                ChartKind::SupportResistance,
                charts_dir,
                |path, title| renderer.series_chart(path, title, &series, Some(levels)),
            ),
            None => ChartOutcome::Skipped,
        };

        ChartReport {
            symbol: symbol.to_string(),
            price,
            support_resistance,
        }
    }

    fn placeholders(&self, symbol: &str, charts_dir: &Path, reason: &str) -> ChartReport {
        let renderer = self.renderer();
        let [price, support_resistance] = ChartKind::ALL.map(|kind| {
            let path = kind.path(charts_dir, symbol);
            match renderer.placeholder(&path, &kind.placeholder_message(symbol)) {
                Ok(()) => ChartOutcome::Placeholder {
                    path,
                    reason: reason.to_string(),
                },
                Err(err) => {
                    self.diagnostics.error(&format!(
                        "Error writing {} placeholder for {}: {}",
                        kind, symbol, err
                    ));
                    ChartOutcome::failed(err.to_string())
                }
            }
        });

        ChartReport {
            symbol: symbol.to_string(),
            price,
            support_resistance,
        }
    }

    fn finish<F>(&self, symbol: &str, kind: ChartKind, charts_dir: &Path, draw: F) -> ChartOutcome
    where
        F: FnOnce(&Path, &str) -> Result<(), ChartError>,
    {
        let path = kind.path(charts_dir, symbol);
        match draw(&path, &kind.title(symbol)) {
            Ok(()) => ChartOutcome::Rendered { path },
            Err(err) => {
                self.diagnostics.error(&format!(
                    "Error generating {} chart for {}: {}",
                    kind, symbol, err
                ));
                ChartOutcome::failed(err.to_string())
            }
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(
            ChartSettings::default(),
            TracingDiagnostics::shared("report_generator"),
        )
    }
}

impl std::fmt::Debug for ReportGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportGenerator")
            .field("settings", &self.settings)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}
