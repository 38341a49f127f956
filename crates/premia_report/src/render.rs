//! Chart drawing on top of `plotters`' bitmap backend.
//!
//! Geometry failures (backend, encoding, IO) are errors. Text failures are
//! not: titles, axis labels and level labels are best-effort, logged as
//! warnings, and the image is still saved without them.

use std::path::Path;

use chrono::{Days, NaiveDate};
use infra_config::{ChartSettings, Rgb};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use premia_core::diagnostics::Diagnostics;

use crate::canvas::CanvasTracker;
use crate::data::{LevelSet, PriceSeries};
use crate::error::ChartError;
use crate::fonts::FONT_FAMILY;

const GRID_LINES: u64 = 8;

fn colour(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn drawing_err(err: impl std::fmt::Display) -> ChartError {
    ChartError::Drawing(err.to_string())
}

/// Shared state for drawing one batch of charts.
pub(crate) struct Renderer<'a> {
    pub settings: &'a ChartSettings,
    pub diagnostics: &'a dyn Diagnostics,
    pub canvases: &'a CanvasTracker,
    /// Whether a font is registered; without one, text is skipped
    pub text: bool,
}

impl Renderer<'_> {
    fn size(&self) -> (u32, u32) {
        (self.settings.width, self.settings.height)
    }

    fn font_px(&self) -> f64 {
        f64::from(self.settings.font_size)
    }

    fn label_px(&self) -> f64 {
        (self.font_px() * 0.7).max(8.0)
    }

    fn text_warning(&self, what: &str, path: &Path, err: impl std::fmt::Display) {
        self.diagnostics.warn(&format!(
            "{} omitted from {}: {}",
            what,
            path.display(),
            err
        ));
    }

    /// White image with `message` centred.
    pub fn placeholder(&self, path: &Path, message: &str) -> Result<(), ChartError> {
        let _canvas = self.canvases.open();
        let (width, height) = self.size();
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_err)?;

        if self.text {
            let style = TextStyle::from((FONT_FAMILY, self.font_px()).into_font())
                .pos(Pos::new(HPos::Center, VPos::Center));
            let centre = ((width / 2) as i32, (height / 2) as i32);
            if let Err(err) = root.draw(&Text::new(message.to_string(), centre, style)) {
                self.text_warning("Placeholder message", path, err);
            }
        }

        root.present().map_err(drawing_err)?;
        Ok(())
    }

    /// Close price line, optionally with horizontal support/resistance levels.
    pub fn series_chart(
        &self,
        path: &Path,
        title: &str,
        series: &PriceSeries,
        levels: Option<LevelSet<'_>>,
    ) -> Result<(), ChartError> {
        let (x_start, x_end) = series
            .date_bounds()
            .ok_or_else(|| ChartError::InsufficientData("empty series".to_string()))?;
        let last_date = series.last_date().unwrap_or(x_end);
        let extra: Vec<f64> = levels.map(|l| l.all().collect()).unwrap_or_default();
        let (y_min, y_max) = series.value_bounds(&extra)?;

        let _canvas = self.canvases.open();
        let root = BitMapBackend::new(path, self.size()).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_err)?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80);
        if self.text {
            builder.caption(title, (FONT_FAMILY, self.font_px()).into_font());
        }
        let mut chart = builder
            .build_cartesian_2d(x_start..x_end, y_min..y_max)
            .map_err(drawing_err)?;

        let mut labelled = false;
        if self.text {
            let date_label = |d: &NaiveDate| d.format("%Y-%m-%d").to_string();
            let price_label = |v: &f64| format!("{:.2}", v);
            let mesh = chart
                .configure_mesh()
                .x_desc("Date")
                .y_desc("Price")
                .x_labels(8)
                .x_label_formatter(&date_label)
                .y_label_formatter(&price_label)
                .draw();
            match mesh {
                Ok(()) => labelled = true,
                Err(err) => self.text_warning("Axis labels", path, err),
            }
        }

        // Without text the mesh cannot be laid out, so the grid is drawn bare.
        if !labelled {
            let span = (x_end - x_start).num_days().max(0) as u64;
            let y_step = (y_max - y_min) / GRID_LINES as f64;
            let grid = BLACK.mix(0.1).stroke_width(1);

            let verticals = (0..=GRID_LINES).filter_map(|i| {
                let x = x_start.checked_add_days(Days::new(span * i / GRID_LINES))?;
                Some(PathElement::new(vec![(x, y_min), (x, y_max)], grid))
            });
            let horizontals = (0..=GRID_LINES).map(|i| {
                let y = y_min + y_step * i as f64;
                PathElement::new(vec![(x_start, y), (x_end, y)], grid)
            });
            chart
                .draw_series(verticals.chain(horizontals))
                .map_err(drawing_err)?;
        }

        chart
            .draw_series(LineSeries::new(
                series.points().iter().copied(),
                colour(self.settings.line_colour).stroke_width(2),
            ))
            .map_err(drawing_err)?;

        if let Some(levels) = levels {
            let groups = [
                ("S", levels.support, self.settings.support_colour),
                ("R", levels.resistance, self.settings.resistance_colour),
            ];
            let opacity = self.settings.level_opacity;

            for (prefix, values, rgb) in groups {
                let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
                chart
                    .draw_series(values.iter().map(|&level| {
                        PathElement::new(
                            vec![(x_start, level), (x_end, level)],
                            colour(rgb).mix(opacity).stroke_width(2),
                        )
                    }))
                    .map_err(drawing_err)?;

                if self.text {
                    let style = TextStyle::from((FONT_FAMILY, self.label_px()).into_font())
                        .pos(Pos::new(HPos::Right, VPos::Center));
                    let labels = values.iter().map(|&level| {
                        Text::new(
                            format!("{}: {:.2}", prefix, level),
                            (last_date, level),
                            style.clone(),
                        )
                    });
                    if let Err(err) = chart.draw_series(labels) {
                        self.text_warning("Level labels", path, err);
                    }
                }
            }
        }

        root.present().map_err(drawing_err)?;
        Ok(())
    }
}
