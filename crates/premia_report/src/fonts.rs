//! Font registration for chart text.
//!
//! Chart text is rendered with a font registered under the `sans-serif`
//! family. The registry is process-wide: the first registration wins for the
//! lifetime of the process. DejaVu Sans is bundled (see
//! `assets/DejaVuSans-LICENSE.txt`) and used whenever no usable
//! `font_path` is configured.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{register_font, FontStyle};

use crate::error::ChartError;

/// Family name every chart text style uses.
pub(crate) const FONT_FAMILY: &str = "sans-serif";

static BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

static REGISTERED: OnceLock<Result<FontSource, String>> = OnceLock::new();

/// Where the registered chart font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FontSource {
    /// A configured font file
    File(PathBuf),
    /// The bundled DejaVu Sans
    Bundled,
}

impl FontSource {
    /// Whether this registration honours the `preferred` font path.
    pub fn honours(&self, preferred: Option<&Path>) -> bool {
        match (preferred, self) {
            (None, _) => true,
            (Some(wanted), FontSource::File(path)) => wanted == path,
            (Some(_), FontSource::Bundled) => false,
        }
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(path) => write!(f, "{}", path.display()),
            FontSource::Bundled => write!(f, "bundled DejaVu Sans"),
        }
    }
}

/// Register the chart font once per process.
///
/// `preferred` is tried first, falling back to the bundled font. Later calls
/// return the first registration whatever `preferred` they pass.
pub(crate) fn ensure_registered(preferred: Option<&Path>) -> Result<FontSource, ChartError> {
    REGISTERED
        .get_or_init(|| register_first(preferred))
        .clone()
        .map_err(ChartError::Font)
}

fn register_first(preferred: Option<&Path>) -> Result<FontSource, String> {
    if let Some(path) = preferred {
        if let Ok(bytes) = std::fs::read(path) {
            // The registry requires 'static font data.
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if register_font(FONT_FAMILY, FontStyle::Normal, bytes).is_ok() {
                return Ok(FontSource::File(path.to_path_buf()));
            }
        }
    }

    register_font(FONT_FAMILY, FontStyle::Normal, BUNDLED_FONT)
        .map(|_| FontSource::Bundled)
        .map_err(|_| "bundled font is not a valid TrueType/OpenType font".to_string())
}
