//! Composed Moody chart
//!
//! [`MoodyChart`] is the output of the composer: every curve, label, grid line
//! and annotation in data coordinates, plus the diagnostics raised while
//! building them. It is backend-independent; [`MoodyChart::draw`] replays it
//! onto any [`Figure`].

use std::fmt;

use plotters::style::{RGBColor, BLACK};

use super::annotations::RegionAnnotation;
use super::config::Palette;
use super::curves::{CurveKind, FrictionCurve, LineStyle};
use super::figure::{AxisSpec, Figure, LineSpec, RectangleSpec, RegionSpec, TextAnchor, TextSpec};
use super::grid::{Axis, GridLine, Tick};
use super::labels::RoughnessLabel;

/// Moody line width in points
pub const CURVE_WIDTH_PT: f64 = 1.0;

pub const ROUGHNESS_FONT_PT: f64 = 6.0;
pub const SECONDARY_LABEL_FONT_PT: f64 = 10.0;
pub const REGION_FONT_PT: f64 = 8.0;
pub const REGION_ARROW_WIDTH_PT: f64 = 0.3;
pub const CRITICAL_ZONE_EDGE_PT: f64 = 0.3;

/// Fill of the critical zone
pub const LIGHT_GRAY: RGBColor = RGBColor(211, 211, 211);

// =================================================================================================
// Diagnostics
// =================================================================================================

/// Non-fatal event raised while composing
///
/// Each one is also logged as a warning when it happens.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The onset restriction left no Reynolds numbers for this roughness
    EmptySubdomain { relative_roughness: f64 },

    /// A closed-form curve has no point inside the plot range
    EmptyCurve { kind: CurveKind },

    /// Unknown color mode, replaced by the color cycle
    UnknownColorMode(String),

    /// Unknown locale, replaced by English
    UnknownLocale(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EmptySubdomain { relative_roughness } => {
                write!(f, "skipped relative roughness {relative_roughness}: empty Reynolds range")
            }
            Diagnostic::EmptyCurve { kind } => write!(f, "skipped {kind} curve: empty Reynolds range"),
            Diagnostic::UnknownColorMode(name) => {
                write!(f, "unknown color \"{name}\", using the default color cycle")
            }
            Diagnostic::UnknownLocale(name) => write!(f, "unknown language \"{name}\", using English"),
        }
    }
}

// =================================================================================================
// Summary
// =================================================================================================

/// Counts of what a chart contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartSummary {
    pub laminar: usize,
    pub transition: usize,
    pub turbulent: usize,
    pub boundary: usize,
    pub roughness_labels: usize,
    pub annotations: usize,
    pub diagnostics: usize,
}

impl ChartSummary {
    pub fn curves(&self) -> usize {
        self.laminar + self.transition + self.turbulent + self.boundary
    }
}

impl fmt::Display for ChartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} curves ({} turbulent), {} roughness labels, {} annotations, {} diagnostics",
            self.curves(),
            self.turbulent,
            self.roughness_labels,
            self.annotations,
            self.diagnostics
        )
    }
}

// =================================================================================================
// Chart
// =================================================================================================

/// Shaded band over the critical Reynolds range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalZone {
    pub reynolds: (f64, f64),
    pub friction: (f64, f64),
}

/// Rotated axis label naming the roughness values on the right
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryLabel {
    pub text: String,
    pub position: (f64, f64),
}

/// A complete, backend-independent Moody chart
#[derive(Debug, Clone, PartialEq)]
pub struct MoodyChart {
    /// Figure size in inches
    pub size: (f64, f64),

    /// Reynolds axis range
    pub reynolds_range: (f64, f64),

    /// Friction axis range
    pub friction_range: (f64, f64),

    pub reynolds_label: String,
    pub friction_label: String,
    pub secondary_label: SecondaryLabel,

    /// Curves in drawing order: laminar, transition, turbulent, boundary
    pub curves: Vec<FrictionCurve>,

    pub roughness_labels: Vec<RoughnessLabel>,
    pub annotations: Vec<RegionAnnotation>,
    pub grid_lines: Vec<GridLine>,
    pub reynolds_ticks: Vec<Tick>,
    pub friction_ticks: Vec<Tick>,
    pub critical_zone: CriticalZone,
    pub palette: Palette,
    pub diagnostics: Vec<Diagnostic>,
}

impl MoodyChart {
    pub fn summary(&self) -> ChartSummary {
        let mut summary = ChartSummary {
            roughness_labels: self.roughness_labels.len(),
            annotations: self.annotations.len(),
            diagnostics: self.diagnostics.len(),
            ..ChartSummary::default()
        };
        for curve in &self.curves {
            match curve.kind() {
                CurveKind::Laminar => summary.laminar += 1,
                CurveKind::Transition => summary.transition += 1,
                CurveKind::Turbulent { .. } => summary.turbulent += 1,
                CurveKind::FullyRoughBoundary => summary.boundary += 1,
            }
        }
        summary
    }

    /// Curves of one kind, in drawing order
    pub fn curves_of(&self, kind: CurveKind) -> impl Iterator<Item = &FrictionCurve> {
        self.curves.iter().filter(move |c| c.kind() == kind)
    }

    /// Turbulent curve of a relative roughness, if it was drawn
    pub fn turbulent_curve(&self, relative_roughness: f64) -> Option<&FrictionCurve> {
        self.curves
            .iter()
            .find(|c| c.kind().relative_roughness() == Some(relative_roughness))
    }

    /// Relative roughness values skipped for an empty Reynolds range
    pub fn skipped_roughness(&self) -> Vec<f64> {
        self.diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::EmptySubdomain { relative_roughness } => Some(*relative_roughness),
                _ => None,
            })
            .collect()
    }

    /// Describe the chart to `figure`, back to front
    ///
    /// Painting order: critical zone, grid, Moody curves, roughness labels,
    /// secondary axis label, region annotations.
    pub fn draw<F: Figure + ?Sized>(&self, figure: &mut F) {
        let (re_min, re_max) = self.reynolds_range;
        let (f_min, f_max) = self.friction_range;

        figure.set_size(self.size.0, self.size.1);
        figure.set_axes(
            AxisSpec {
                label: self.reynolds_label.clone(),
                range: self.reynolds_range,
                ticks: self.reynolds_ticks.clone(),
            },
            AxisSpec {
                label: self.friction_label.clone(),
                range: self.friction_range,
                ticks: self.friction_ticks.clone(),
            },
        );

        let zone = &self.critical_zone;
        figure.add_rectangle(RectangleSpec {
            lower_left: (zone.reynolds.0, zone.friction.0),
            upper_right: (zone.reynolds.1, zone.friction.1),
            fill: LIGHT_GRAY,
            edge: BLACK,
            edge_width_pt: CRITICAL_ZONE_EDGE_PT,
        });

        for line in &self.grid_lines {
            let points = match line.axis {
                Axis::Reynolds => vec![(line.value, f_min), (line.value, f_max)],
                Axis::Friction => vec![(re_min, line.value), (re_max, line.value)],
            };
            figure.add_line(LineSpec {
                points,
                color: BLACK,
                width_pt: line.tier.line_width_pt(),
                style: LineStyle::Solid,
            });
        }

        for (index, curve) in self.curves.iter().enumerate() {
            figure.add_line(LineSpec {
                points: curve.points().collect(),
                color: self.palette.color(index),
                width_pt: CURVE_WIDTH_PT,
                style: curve.style(),
            });
        }

        for label in &self.roughness_labels {
            figure.add_text(TextSpec {
                text: label.text.clone(),
                position: label.position,
                font_size_pt: ROUGHNESS_FONT_PT,
                anchor: TextAnchor::Left,
                vertical: false,
            });
        }

        figure.add_text(TextSpec {
            text: self.secondary_label.text.clone(),
            position: self.secondary_label.position,
            font_size_pt: SECONDARY_LABEL_FONT_PT,
            anchor: TextAnchor::Center,
            vertical: true,
        });

        for annotation in &self.annotations {
            figure.add_region(RegionSpec {
                start: annotation.start,
                end: annotation.end,
                friction: annotation.friction,
                heads: annotation.arrow,
                label: annotation.label.clone(),
                font_size_pt: REGION_FONT_PT,
                arrow_width_pt: REGION_ARROW_WIDTH_PT,
            });
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ArrowHeads, ColorMode, FigureDescription, GridTier, MoodyComposer, MoodyConfig, Primitive};

    fn default_chart() -> MoodyChart {
        MoodyComposer::new(MoodyConfig::default()).compose().unwrap()
    }

    fn drawn(chart: &MoodyChart) -> FigureDescription {
        let mut figure = FigureDescription::new();
        chart.draw(&mut figure);
        figure
    }

    #[test]
    fn test_summary_display() {
        let summary = default_chart().summary();
        assert_eq!(summary.curves(), 30);
        assert!(summary.to_string().starts_with("30 curves (27 turbulent)"));
    }

    #[test]
    fn test_turbulent_curve_lookup() {
        let chart = default_chart();
        assert!(chart.turbulent_curve(2e-4).is_some());
        assert!(chart.turbulent_curve(3e-4).is_none());
    }

    #[test]
    fn test_draw_sets_axes() {
        let figure = drawn(&default_chart());
        let x = figure.x_axis.unwrap();
        let y = figure.y_axis.unwrap();
        assert_eq!(x.range, (500.0, 1e8));
        assert_eq!(y.range, (0.008, 0.1));
        assert_eq!(x.label, "Reynolds number (Re)");
        assert_eq!((figure.width_in, figure.height_in), (11.692, 8.267));
    }

    #[test]
    fn test_draw_paints_critical_zone_first() {
        let figure = drawn(&default_chart());
        match &figure.primitives[0] {
            Primitive::Rectangle(zone) => {
                assert_eq!(zone.lower_left, (2000.0, 0.008));
                assert_eq!(zone.upper_right, (4000.0, 0.1));
                assert_eq!(zone.fill, LIGHT_GRAY);
            }
            other => panic!("expected the critical zone, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_emits_grid_then_curves() {
        let chart = default_chart();
        let figure = drawn(&chart);
        let lines: Vec<&LineSpec> = figure.lines().collect();
        assert_eq!(lines.len(), chart.grid_lines.len() + chart.curves.len());

        let major = GridTier::Major.line_width_pt();
        assert!(lines[..chart.grid_lines.len()].iter().all(|l| l.color == BLACK));
        assert!(lines.iter().any(|l| l.width_pt == major));

        let curves = &lines[chart.grid_lines.len()..];
        assert!(curves.iter().all(|l| l.width_pt == CURVE_WIDTH_PT));
        assert_eq!(curves[1].style, LineStyle::Dashed);
    }

    #[test]
    fn test_mono_draws_black_curves() {
        let config = MoodyConfig {
            color: ColorMode::Mono,
            ..MoodyConfig::default()
        };
        let chart = MoodyComposer::new(config).compose().unwrap();
        let figure = drawn(&chart);
        assert!(figure.lines().all(|l| l.color == BLACK));
    }

    #[test]
    fn test_draw_regions_and_texts() {
        let chart = default_chart();
        let figure = drawn(&chart);

        let regions: Vec<&RegionSpec> = figure.regions().collect();
        assert_eq!(regions.len(), 4);
        assert_eq!(regions[2].heads, ArrowHeads::End);

        let vertical: Vec<&TextSpec> = figure.texts().filter(|t| t.vertical).collect();
        assert_eq!(vertical.len(), 1);
        assert_eq!(vertical[0].position.0, 2e8);

        assert_eq!(
            figure.texts().filter(|t| !t.vertical).count(),
            chart.roughness_labels.len()
        );
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::EmptySubdomain { relative_roughness: 1e-6 };
        assert!(diagnostic.to_string().contains("1e-6") || diagnostic.to_string().contains("0.000001"));
        assert!(Diagnostic::UnknownColorMode("sepia".into()).to_string().contains("sepia"));
    }
}
