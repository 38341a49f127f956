//! Chart rendering settings.

use serde::Deserialize;
use std::path::PathBuf;

/// An RGB colour as three 0-255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }
}

/// Rendering settings shared by every chart kind.
///
/// Defaults reproduce a 10x6 inch figure at 100 dpi with a blue price
/// line, green support levels and red resistance levels at half opacity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Base font size in pixels for titles and messages
    pub font_size: u32,
    /// Price line colour
    pub line_colour: Rgb,
    /// Support level colour
    pub support_colour: Rgb,
    /// Resistance level colour
    pub resistance_colour: Rgb,
    /// Opacity of level lines (0.0..=1.0)
    pub level_opacity: f64,
    /// TrueType/OpenType font for chart text; the bundled DejaVu Sans is used
    /// if unset or unreadable. Fonts are registered once per process, so only
    /// the first chart generator's font takes effect.
    pub font_path: Option<PathBuf>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            font_size: 20,
            line_colour: Rgb(31, 119, 180),
            support_colour: Rgb(0, 128, 0),
            resistance_colour: Rgb(255, 0, 0),
            level_opacity: 0.5,
            font_path: None,
        }
    }
}

impl ChartSettings {
    /// Collect validation problems into `errors`.
    pub(crate) fn collect_errors(&self, errors: &mut Vec<String>) {
        if self.width < 100 || self.height < 100 {
            errors.push(format!(
                "chart size {}x{} is too small (minimum 100x100)",
                self.width, self.height
            ));
        }
        if self.width > 10_000 || self.height > 10_000 {
            errors.push(format!(
                "chart size {}x{} exceeds maximum allowed (10000x10000)",
                self.width, self.height
            ));
        }
        if self.font_size == 0 {
            errors.push("font_size must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.level_opacity) {
            errors.push(format!(
                "level_opacity {} must be within 0.0..=1.0",
                self.level_opacity
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let mut errors = Vec::new();
        ChartSettings::default().collect_errors(&mut errors);
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn test_colour_from_array() {
        let settings: ChartSettings = toml::from_str("line_colour = [1, 2, 3]").unwrap();
        assert_eq!(settings.line_colour, Rgb(1, 2, 3));
        assert_eq!(settings.width, 1000);
    }

    #[test]
    fn test_opacity_out_of_range() {
        let settings = ChartSettings {
            level_opacity: 1.5,
            ..ChartSettings::default()
        };
        let mut errors = Vec::new();
        settings.collect_errors(&mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("level_opacity"));
    }
}
