//! Figure abstraction
//!
//! A composed [`MoodyChart`](super::MoodyChart) does not know how it will be
//! rendered. It describes itself as a sequence of drawing primitives to any
//! [`Figure`]: lines, rectangles, texts and labelled regions in data
//! coordinates of a log-log plot, plus texts anchored outside the plot area.
//!
//! [`FigureDescription`] records those primitives. The `plotters` renderer in
//! [`crate::output`] consumes it, and tests inspect it directly.
//!
//! # Sizes
//!
//! Line widths and font sizes are in points (1/72 in), so the same
//! description renders consistently at any resolution.

use plotters::style::RGBColor;

use super::annotations::ArrowHeads;
use super::curves::LineStyle;
use super::grid::Tick;

/// Range, label and ticks of one logarithmic axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub label: String,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

/// Polyline in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub width_pt: f64,
    pub style: LineStyle,
}

/// Filled, outlined rectangle in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleSpec {
    pub lower_left: (f64, f64),
    pub upper_right: (f64, f64),
    pub fill: RGBColor,
    pub edge: RGBColor,
    pub edge_width_pt: f64,
}

/// Horizontal placement of a text relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor, vertically centered
    Left,

    /// Text centered on the anchor
    Center,
}

/// Text in data coordinates
///
/// Anchors may lie outside the axis ranges, e.g. the roughness labels right of
/// the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub text: String,
    pub position: (f64, f64),
    pub font_size_pt: f64,
    pub anchor: TextAnchor,

    /// Rotate a quarter turn to read bottom to top
    pub vertical: bool,
}

/// Horizontal arrow spanning a Reynolds interval, with a label on a white box
/// at the geometric mean of the span
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSpec {
    pub start: f64,
    pub end: f64,
    pub friction: f64,
    pub heads: ArrowHeads,
    pub label: String,
    pub font_size_pt: f64,
    pub arrow_width_pt: f64,
}

impl RegionSpec {
    pub fn label_anchor(&self) -> (f64, f64) {
        ((self.start * self.end).sqrt(), self.friction)
    }
}

// =================================================================================================
// Figure trait
// =================================================================================================

/// Drawing surface a chart can describe itself to
///
/// Primitives are added in painting order: later primitives cover earlier
/// ones.
pub trait Figure {
    /// Figure size in inches
    fn set_size(&mut self, width_in: f64, height_in: f64);

    fn set_axes(&mut self, x: AxisSpec, y: AxisSpec);

    fn add_rectangle(&mut self, rectangle: RectangleSpec);

    fn add_line(&mut self, line: LineSpec);

    fn add_text(&mut self, text: TextSpec);

    fn add_region(&mut self, region: RegionSpec);
}

/// One recorded primitive, kept in painting order
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rectangle(RectangleSpec),
    Line(LineSpec),
    Text(TextSpec),
    Region(RegionSpec),
}

/// [`Figure`] that records everything it is given
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FigureDescription {
    pub width_in: f64,
    pub height_in: f64,
    pub x_axis: Option<AxisSpec>,
    pub y_axis: Option<AxisSpec>,
    pub primitives: Vec<Primitive>,
}

impl FigureDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSpec> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextSpec> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn regions(&self) -> impl Iterator<Item = &RegionSpec> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Region(region) => Some(region),
            _ => None,
        })
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &RectangleSpec> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Rectangle(rectangle) => Some(rectangle),
            _ => None,
        })
    }
}

impl Figure for FigureDescription {
    fn set_size(&mut self, width_in: f64, height_in: f64) {
        self.width_in = width_in;
        self.height_in = height_in;
    }

    fn set_axes(&mut self, x: AxisSpec, y: AxisSpec) {
        self.x_axis = Some(x);
        self.y_axis = Some(y);
    }

    fn add_rectangle(&mut self, rectangle: RectangleSpec) {
        self.primitives.push(Primitive::Rectangle(rectangle));
    }

    fn add_line(&mut self, line: LineSpec) {
        self.primitives.push(Primitive::Line(line));
    }

    fn add_text(&mut self, text: TextSpec) {
        self.primitives.push(Primitive::Text(text));
    }

    fn add_region(&mut self, region: RegionSpec) {
        self.primitives.push(Primitive::Region(region));
    }
}

// =================================================================================================
// Tests
// =================================================================================================
