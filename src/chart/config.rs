//! Chart configuration
//!
//! [`MoodyConfig`] gathers every option of a chart: figure size, plot ranges,
//! label locale, line colors, regime limits, the roughness table and the
//! solver policy. All fields have defaults, and a JSON document only needs to
//! name the fields it changes.
//!
//! # Example
//!
//! ```rust
//! use moody_chart::chart::{ColorMode, Locale, MoodyConfig};
//!
//! let config = MoodyConfig::from_json_str(r#"{ "lang": "es", "color": "mono" }"#).unwrap();
//! assert_eq!(config.lang, Locale::Es);
//! assert_eq!(config.color, ColorMode::Mono);
//! assert_eq!(config.re_plot_max, 1e8);
//! ```

use std::path::Path;

use plotters::style::{RGBColor, BLACK, BLUE};
use serde::{Deserialize, Serialize};

use crate::error::MoodyResult;
use crate::physics::{RegimeLimits, RoughnessTable};
use crate::solver::SolverConfiguration;

/// Number of log-spaced Reynolds samples of the reference chart
pub const DEFAULT_SAMPLES: usize = 200;

/// Upper bound on `samples`
pub const MAX_SAMPLES: usize = 100_000;

// =================================================================================================
// Locale
// =================================================================================================

/// Language of the chart labels
///
/// Unrecognized values are kept so the composer can report them; they render
/// as English.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    #[default]
    En,
    Es,
    Unrecognized(String),
}

impl Locale {
    pub fn as_str(&self) -> &str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Unrecognized(name) => name,
        }
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        match value {
            "en" => Locale::En,
            "es" => Locale::Es,
            other => Locale::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Locale::from(value.as_str())
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.as_str().to_string()
    }
}

// =================================================================================================
// Color mode
// =================================================================================================

/// Color scheme of the Moody lines
///
/// The underlying grid is always black.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorMode {
    /// Every Moody line black
    Mono,

    /// Ten-color cycle
    #[default]
    Color,

    /// Every Moody line blue
    Octave,

    /// Unknown name, drawn with the color cycle
    Unrecognized(String),
}

impl ColorMode {
    pub fn as_str(&self) -> &str {
        match self {
            ColorMode::Mono => "mono",
            ColorMode::Color => "color",
            ColorMode::Octave => "octave",
            ColorMode::Unrecognized(name) => name,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ColorMode::Mono => Palette::single(BLACK),
            ColorMode::Octave => Palette::single(BLUE),
            ColorMode::Color | ColorMode::Unrecognized(_) => Palette::cycle(),
        }
    }
}

impl From<&str> for ColorMode {
    fn from(value: &str) -> Self {
        match value {
            "mono" => ColorMode::Mono,
            "color" => ColorMode::Color,
            "octave" => ColorMode::Octave,
            other => ColorMode::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ColorMode {
    fn from(value: String) -> Self {
        ColorMode::from(value.as_str())
    }
}

impl From<ColorMode> for String {
    fn from(value: ColorMode) -> Self {
        value.as_str().to_string()
    }
}

// =================================================================================================
// Palette
// =================================================================================================

/// Line colors, assigned to curves in drawing order and cycled
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<RGBColor>,
}

impl Palette {
    pub fn single(color: RGBColor) -> Self {
        Self { colors: vec![color] }
    }

    /// The usual ten-color plotting cycle
    pub fn cycle() -> Self {
        Self {
            colors: vec![
                RGBColor(31, 119, 180),  // Blue
                RGBColor(255, 127, 14),  // Orange
                RGBColor(44, 160, 44),   // Green
                RGBColor(214, 39, 40),   // Red
                RGBColor(148, 103, 189), // Purple
                RGBColor(140, 86, 75),   // Brown
                RGBColor(227, 119, 194), // Pink
                RGBColor(127, 127, 127), // Gray
                RGBColor(188, 189, 34),  // Olive
                RGBColor(23, 190, 207),  // Cyan
            ],
        }
    }

    /// Color of the curve drawn at position `index`
    pub fn color(&self, index: usize) -> RGBColor {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// =================================================================================================
// Moody configuration
// =================================================================================================

/// Configuration of one Moody chart
///
/// # Defaults
///
/// - figure 11.692 × 8.267 in (A4 landscape)
/// - `Re ∈ [500, 1e8]`, `f ∈ [0.008, 0.1]`
/// - `lang = "en"`, `color = "color"`, `debug = false`
/// - 200 Reynolds samples, standard regime limits and roughness table,
///   ten fixed Colebrook iterations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodyConfig {
    /// Figure width in inches
    pub figure_width_in: f64,

    /// Figure height in inches
    pub figure_height_in: f64,

    /// Lower end of the Reynolds axis
    pub re_plot_min: f64,

    /// Upper end of the Reynolds axis
    pub re_plot_max: f64,

    /// Lower end of the friction axis
    pub f_plot_min: f64,

    /// Upper end of the friction axis
    pub f_plot_max: f64,

    /// Label language
    pub lang: Locale,

    /// Moody line colors
    pub color: ColorMode,

    /// Log roughness label details while composing
    pub debug: bool,

    /// Number of log-spaced Reynolds samples
    pub samples: usize,

    pub limits: RegimeLimits,

    pub roughness: RoughnessTable,

    pub solver: SolverConfiguration,
}

impl Default for MoodyConfig {
    fn default() -> Self {
        Self {
            figure_width_in: 11.692,
            figure_height_in: 8.267,
            re_plot_min: 500.0,
            re_plot_max: 1e8,
            f_plot_min: 0.008,
            f_plot_max: 0.1,
            lang: Locale::En,
            color: ColorMode::Color,
            debug: false,
            samples: DEFAULT_SAMPLES,
            limits: RegimeLimits::default(),
            roughness: RoughnessTable::default(),
            solver: SolverConfiguration::default(),
        }
    }
}

impl MoodyConfig {
    /// Parse a (possibly partial) JSON document over the defaults
    pub fn from_json_str(json: &str) -> MoodyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> MoodyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Validate ranges, sizes and the embedded tables
    ///
    /// Unrecognized `lang`/`color` values are not errors: the composer falls
    /// back and reports them.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("figure_width_in", self.figure_width_in),
            ("figure_height_in", self.figure_height_in),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be finite and positive, got {value}"));
            }
        }

        validate_log_range("Reynolds", self.re_plot_min, self.re_plot_max)?;
        validate_log_range("friction", self.f_plot_min, self.f_plot_max)?;

        if self.samples < 2 {
            return Err(format!("At least 2 Reynolds samples are required, got {}", self.samples));
        }
        if self.samples > MAX_SAMPLES {
            return Err(format!(
                "At most {MAX_SAMPLES} Reynolds samples are allowed, got {}",
                self.samples
            ));
        }

        self.limits.validate()?;
        self.roughness.validate()?;
        self.solver.validate()
    }
}

fn validate_log_range(axis: &str, min: f64, max: f64) -> Result<(), String> {
    if !min.is_finite() || !max.is_finite() || min <= 0.0 {
        return Err(format!("{axis} range must be finite and positive, got [{min}, {max}]"));
    }
    if min >= max {
        return Err(format!("{axis} range is empty: [{min}, {max}]"));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
