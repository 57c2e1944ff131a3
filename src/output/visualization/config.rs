//! Render configuration
//!
//! Settings that only matter to the raster/vector renderer. Chart content
//! (ranges, colors of the Moody lines, labels) is decided by
//! [`MoodyConfig`](crate::chart::MoodyConfig); this is about pixels and fonts.

use plotters::prelude::*;

/// Configuration for rendering a figure
///
/// # Fields
///
/// - `dpi`: pixels per inch; pixel size = figure inches × dpi
/// - `title`: optional caption above the plot
/// - `background`: background color
/// - `font_family`: font for every text of the figure
/// - `axis_label_size_pt`, `major_tick_size_pt`, `minor_tick_size_pt`: font
///   sizes in points
///
/// # Example
///
/// ```rust
/// use moody_chart::output::visualization::RenderConfig;
///
/// let config = RenderConfig::default().with_title("Moody diagram").with_dpi(150.0);
/// assert_eq!(config.pixel_size(11.692, 8.267), (1754, 1240));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Pixels per inch (default: 100)
    pub dpi: f64,

    /// Caption above the plot (default: none)
    pub title: Option<String>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Font family (default: "sans-serif")
    pub font_family: String,

    /// Axis label font size in points (default: 10)
    pub axis_label_size_pt: f64,

    /// Major tick label font size in points (default: 10)
    pub major_tick_size_pt: f64,

    /// Minor tick label font size in points (default: 6)
    pub minor_tick_size_pt: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 100.0,
            title: None,
            background: WHITE,
            font_family: "sans-serif".to_string(),
            axis_label_size_pt: 10.0,
            major_tick_size_pt: 10.0,
            minor_tick_size_pt: 6.0,
        }
    }
}

impl RenderConfig {
    /// Add a caption above the plot
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Pixel dimensions of a figure of `width_in` × `height_in` inches
    pub fn pixel_size(&self, width_in: f64, height_in: f64) -> (u32, u32) {
        (
            (width_in * self.dpi).round().max(1.0) as u32,
            (height_in * self.dpi).round().max(1.0) as u32,
        )
    }

    /// Convert a length in points to pixels
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(format!("dpi must be finite and positive, got {}", self.dpi));
        }
        for (name, size) in [
            ("axis_label_size_pt", self.axis_label_size_pt),
            ("major_tick_size_pt", self.major_tick_size_pt),
            ("minor_tick_size_pt", self.minor_tick_size_pt),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(format!("{name} must be finite and positive, got {size}"));
            }
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
