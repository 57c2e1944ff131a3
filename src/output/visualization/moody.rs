//! Moody chart rendering with plotters
//!
//! The chart is first replayed into a [`FigureDescription`], which is then
//! painted onto a plotters drawing area with log-log coordinates. Grid,
//! ticks and labels are all drawn from the description; the plotters mesh
//! only contributes the axis lines and axis descriptions.
//!
//! # Output format
//!
//! The file extension selects the backend: `.svg` writes SVG, anything else
//! a bitmap (PNG for `.png`). Pixel size is the figure size in inches times
//! [`RenderConfig::dpi`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use moody_chart::chart::{MoodyComposer, MoodyConfig};
//! use moody_chart::output::visualization::plot_moody_chart;
//!
//! let chart = MoodyComposer::new(MoodyConfig::default()).compose()?;
//! plot_moody_chart(&chart, "moody.svg", None)?;
//! # Ok::<(), moody_chart::MoodyError>(())
//! ```

use std::error::Error;
use std::iter;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use crate::chart::{
    ArrowHeads,
    AxisSpec,
    FigureDescription,
    GridTier,
    LineSpec,
    LineStyle,
    MoodyChart,
    Primitive,
    RegionSpec,
    TextAnchor,
    TextSpec,
};
use crate::error::{MoodyError, MoodyResult};

use super::config::RenderConfig;

/// Dash and gap lengths of dashed curves, in points
const DASH_PT: f64 = 3.7;
const GAP_PT: f64 = 1.6;

/// Share of the figure width kept free right of the plot for roughness labels
const RIGHT_MARGIN_FRACTION: f64 = 0.14;

// =================================================================================================
// Public API
// =================================================================================================

/// Render a composed chart to `output_path`
///
/// # Arguments
///
/// * `chart`       — Composed chart
/// * `output_path` — Output file path (`.svg` → vector, otherwise bitmap)
/// * `config`      — Optional render configuration; `None` uses defaults
///
/// # Errors
///
/// [`MoodyError::Render`] if the backend cannot draw or write the file.
pub fn plot_moody_chart(
    chart: &MoodyChart,
    output_path: &str,
    config: Option<&RenderConfig>,
) -> MoodyResult<()> {
    let mut figure = FigureDescription::new();
    chart.draw(&mut figure);
    render_figure(&figure, output_path, config)
}

/// Render a recorded figure to `output_path`
///
/// Both axes are logarithmic, so their ranges must be positive.
pub fn render_figure(
    figure: &FigureDescription,
    output_path: &str,
    config: Option<&RenderConfig>,
) -> MoodyResult<()> {
    let default_config = RenderConfig::default();
    let config = config.unwrap_or(&default_config);
    config.validate().map_err(MoodyError::Render)?;

    let (Some(x_axis), Some(y_axis)) = (&figure.x_axis, &figure.y_axis) else {
        return Err(MoodyError::Render("figure has no axes".to_string()));
    };
    for axis in [x_axis, y_axis] {
        let (min, max) = axis.range;
        if !(min > 0.0 && min < max && max.is_finite()) {
            return Err(MoodyError::Render(format!(
                "axis \"{}\" needs a positive increasing range for a log scale, got [{min}, {max}]",
                axis.label
            )));
        }
    }

    let size = config.pixel_size(figure.width_in, figure.height_in);

    let result = if is_svg_path(output_path) {
        let backend = SVGBackend::new(output_path, size);
        render_impl(backend, figure, x_axis, y_axis, config)
    } else {
        let backend = BitMapBackend::new(output_path, size);
        render_impl(backend, figure, x_axis, y_axis, config)
    };

    result.map_err(|e| MoodyError::Render(format!("{output_path}: {e}")))?;
    log::debug!("Rendered {}x{} px figure to {output_path}", size.0, size.1);
    Ok(())
}

/// `.svg` in any letter case selects the vector backend
fn is_svg_path(output_path: &str) -> bool {
    Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Pixel helpers derived from the render configuration
struct Scale<'a> {
    config: &'a RenderConfig,
}

impl<'a> Scale<'a> {
    fn px(&self, points: f64) -> f64 {
        self.config.points_to_pixels(points)
    }

    fn font(&self, size_pt: f64) -> FontDesc<'a> {
        FontDesc::new(
            FontFamily::from(self.config.font_family.as_str()),
            self.px(size_pt),
            FontStyle::Normal,
        )
    }

    /// Stroke style for a width in points
    ///
    /// Lines thinner than a pixel are drawn one pixel wide and faded in
    /// proportion, so sub-minor grid lines stay visible but light.
    fn stroke(&self, color: RGBColor, width_pt: f64) -> ShapeStyle {
        let width = self.px(width_pt);
        if width >= 1.0 {
            ShapeStyle::from(&color).stroke_width(width.round() as u32)
        } else {
            ShapeStyle {
                color: color.mix(width.max(0.15)),
                filled: false,
                stroke_width: 1,
            }
        }
    }
}

fn render_impl<DB: DrawingBackend>(
    backend: DB,
    figure: &FigureDescription,
    x_axis: &AxisSpec,
    y_axis: &AxisSpec,
    config: &RenderConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;
    draw_figure_on_area(&root, figure, x_axis, y_axis, config)?;
    root.present()?;
    Ok(())
}

/// Paint every primitive of `figure`, in order, onto `root`
fn draw_figure_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &FigureDescription,
    x_axis: &AxisSpec,
    y_axis: &AxisSpec,
    config: &RenderConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let scale = Scale { config };
    let (width, _) = root.dim_in_pixel();
    let (x_min, x_max) = x_axis.range;
    let (y_min, y_max) = y_axis.range;

    let mut builder = ChartBuilder::on(root);
    if let Some(title) = &config.title {
        builder.caption(title, scale.font(14.0));
    }
    let mut chart = builder
        .margin_top(scale.px(14.0).round() as u32)
        .margin_left(scale.px(8.0).round() as u32)
        .margin_bottom(scale.px(8.0).round() as u32)
        .margin_right((f64::from(width) * RIGHT_MARGIN_FRACTION).round() as u32)
        .x_label_area_size(scale.px(36.0).round() as u32)
        .y_label_area_size(scale.px(44.0).round() as u32)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())?;

    // Axis lines and descriptions only; ticks and grid come from the figure
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .set_all_tick_mark_size(0)
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|_| String::new())
        .x_desc(&x_axis.label)
        .y_desc(&y_axis.label)
        .axis_desc_style(scale.font(config.axis_label_size_pt))
        .draw()?;

    for primitive in &figure.primitives {
        match primitive {
            Primitive::Rectangle(rectangle) => {
                let corners = [rectangle.lower_left, rectangle.upper_right];
                chart.draw_series(iter::once(Rectangle::new(corners, rectangle.fill.filled())))?;
                chart.draw_series(iter::once(Rectangle::new(
                    corners,
                    scale.stroke(rectangle.edge, rectangle.edge_width_pt),
                )))?;
            }
            Primitive::Line(line) => {
                let points: Vec<(i32, i32)> = line.points.iter().map(|p| chart.backend_coord(p)).collect();
                draw_line(root, &points, line, &scale)?;
            }
            Primitive::Text(text) => {
                let position = chart.backend_coord(&text.position);
                draw_text(root, position, text, &scale)?;
            }
            Primitive::Region(region) => {
                let start = chart.backend_coord(&(region.start, region.friction));
                let end = chart.backend_coord(&(region.end, region.friction));
                let anchor = chart.backend_coord(&region.label_anchor());
                draw_region(root, start, end, anchor, region, &scale)?;
            }
        }
    }

    // Frame around the plot area
    chart.draw_series(iter::once(Rectangle::new(
        [(x_min, y_min), (x_max, y_max)],
        BLACK.stroke_width(1),
    )))?;

    for tick in &x_axis.ticks {
        let (px, py) = chart.backend_coord(&(tick.value, y_min));
        let length = tick_length(tick.tier, &scale);
        root.draw(&PathElement::new(vec![(px, py), (px, py + length)], BLACK.stroke_width(1)))?;
        if !tick.label.is_empty() {
            let style = TextStyle::from(scale.font(tick_font_size(tick.tier, config)))
                .pos(Pos::new(HPos::Center, VPos::Top));
            root.draw(&Text::new(tick.label.clone(), (px, py + length + 2), style))?;
        }
    }

    for tick in &y_axis.ticks {
        let (px, py) = chart.backend_coord(&(x_min, tick.value));
        let length = tick_length(tick.tier, &scale);
        root.draw(&PathElement::new(vec![(px - length, py), (px, py)], BLACK.stroke_width(1)))?;
        if !tick.label.is_empty() {
            let style = TextStyle::from(scale.font(tick_font_size(tick.tier, config)))
                .pos(Pos::new(HPos::Right, VPos::Center));
            root.draw(&Text::new(tick.label.clone(), (px - length - 2, py), style))?;
        }
    }

    Ok(())
}

fn tick_length(tier: GridTier, scale: &Scale) -> i32 {
    let points = match tier {
        GridTier::Major => 3.5,
        _ => 2.0,
    };
    scale.px(points).round().max(1.0) as i32
}

fn tick_font_size(tier: GridTier, config: &RenderConfig) -> f64 {
    match tier {
        GridTier::Major => config.major_tick_size_pt,
        _ => config.minor_tick_size_pt,
    }
}

fn draw_line<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    points: &[(i32, i32)],
    line: &LineSpec,
    scale: &Scale,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let style = scale.stroke(line.color, line.width_pt);

    match line.style {
        LineStyle::Solid => {
            root.draw(&PathElement::new(points.to_vec(), style))?;
        }
        LineStyle::Dashed => {
            let path: Vec<(f64, f64)> = points.iter().map(|&(x, y)| (f64::from(x), f64::from(y))).collect();
            for dash in dash_pattern(&path, scale.px(DASH_PT), scale.px(GAP_PT)) {
                let dash: Vec<(i32, i32)> = dash
                    .into_iter()
                    .map(|(x, y)| (x.round() as i32, y.round() as i32))
                    .collect();
                root.draw(&PathElement::new(dash, style))?;
            }
        }
    }
    Ok(())
}

fn draw_text<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    position: (i32, i32),
    text: &TextSpec,
    scale: &Scale,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut font = scale.font(text.font_size_pt);
    if text.vertical {
        font = font.transform(FontTransform::Rotate270);
    }
    let horizontal = match text.anchor {
        TextAnchor::Left => HPos::Left,
        TextAnchor::Center => HPos::Center,
    };
    let style = TextStyle::from(font).pos(Pos::new(horizontal, VPos::Center));
    root.draw(&Text::new(text.text.clone(), position, style))?;
    Ok(())
}

/// Arrow across the region, then its label on a background box
fn draw_region<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    start: (i32, i32),
    end: (i32, i32),
    anchor: (i32, i32),
    region: &RegionSpec,
    scale: &Scale,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.draw(&PathElement::new(vec![start, end], scale.stroke(BLACK, region.arrow_width_pt)))?;

    let head_length = scale.px(5.0).round().max(3.0) as i32;
    let head_width = (head_length / 3).max(1);

    let (ex, ey) = end;
    root.draw(&Polygon::new(
        vec![(ex, ey), (ex - head_length, ey - head_width), (ex - head_length, ey + head_width)],
        BLACK.filled(),
    ))?;
    if region.heads == ArrowHeads::Both {
        let (sx, sy) = start;
        root.draw(&Polygon::new(
            vec![(sx, sy), (sx + head_length, sy - head_width), (sx + head_length, sy + head_width)],
            BLACK.filled(),
        ))?;
    }

    let style = TextStyle::from(scale.font(region.font_size_pt)).pos(Pos::new(HPos::Center, VPos::Center));
    let (text_width, text_height) = root.estimate_text_size(&region.label, &style)?;
    let pad = scale.px(0.3 * region.font_size_pt).round() as i32;
    let (cx, cy) = anchor;
    let half_width = text_width as i32 / 2 + pad;
    let half_height = text_height as i32 / 2 + pad;

    root.draw(&Rectangle::new(
        [(cx - half_width, cy - half_height), (cx + half_width, cy + half_height)],
        scale.config.background.filled(),
    ))?;
    root.draw(&Text::new(region.label.clone(), anchor, style))?;
    Ok(())
}

// =================================================================================================
// Dashes
// =================================================================================================

/// Split a pixel-space polyline into dashes of length `dash` separated by
/// gaps of length `gap`
///
/// The pattern runs continuously across vertices. Non-positive lengths give
/// the whole polyline as a single dash.
fn dash_pattern(points: &[(f64, f64)], dash: f64, gap: f64) -> Vec<Vec<(f64, f64)>> {
    if dash <= 0.0 || gap <= 0.0 || points.len() < 2 {
        return vec![points.to_vec()];
    }

    let mut dashes = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut drawing = true;
    let mut remaining = dash;

    for pair in points.windows(2) {
        let (mut x, mut y) = pair[0];
        let (x1, y1) = pair[1];
        let mut length = (x1 - x).hypot(y1 - y);

        if drawing && current.is_empty() {
            current.push((x, y));
        }

        while length > remaining {
            let t = remaining / length;
            x += (x1 - x) * t;
            y += (y1 - y) * t;
            length -= remaining;
            current.push((x, y));

            if drawing {
                dashes.push(std::mem::take(&mut current));
                remaining = gap;
            } else {
                remaining = dash;
            }
            drawing = !drawing;
        }

        remaining -= length;
        if drawing {
            current.push((x1, y1));
        }
    }

    if current.len() >= 2 {
        dashes.push(current);
    }
    dashes
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{MoodyComposer, MoodyConfig};
    use approx::assert_relative_eq;

    fn default_chart() -> MoodyChart {
        MoodyComposer::new(MoodyConfig::default()).compose().unwrap()
    }

    fn length(dash: &[(f64, f64)]) -> f64 {
        dash.windows(2).map(|w| (w[1].0 - w[0].0).hypot(w[1].1 - w[0].1)).sum()
    }

    #[test]
    fn test_dash_pattern_on_straight_line() {
        let dashes = dash_pattern(&[(0.0, 0.0), (10.0, 0.0)], 2.0, 1.0);
        // 0-2, 3-5, 6-8, 9-10
        assert_eq!(dashes.len(), 4);
        assert_relative_eq!(length(&dashes[0]), 2.0);
        assert_relative_eq!(dashes[1][0].0, 3.0);
        assert_relative_eq!(length(&dashes[3]), 1.0);
    }

    #[test]
    fn test_dash_pattern_continues_across_vertices() {
        let dashes = dash_pattern(&[(0.0, 0.0), (1.0, 0.0), (1.0, 5.0)], 2.0, 1.0);
        // First dash turns the corner: 1 along x, 1 along y
        assert_eq!(dashes[0].len(), 3);
        assert_relative_eq!(length(&dashes[0]), 2.0);
    }

    #[test]
    fn test_dash_pattern_degenerate_input() {
        let line = [(0.0, 0.0), (4.0, 0.0)];
        assert_eq!(dash_pattern(&line, 0.0, 1.0), vec![line.to_vec()]);
        assert_eq!(dash_pattern(&line[..1], 2.0, 1.0).len(), 1);
    }

    #[test]
    fn test_scale_fades_thin_lines() {
        let config = RenderConfig::default();
        let scale = Scale { config: &config };
        let thin = scale.stroke(BLACK, GridTier::SubMinor.line_width_pt());
        assert_eq!(thin.stroke_width, 1);
        assert!(thin.color.3 < 1.0);

        let thick = scale.stroke(BLACK, 1.0);
        assert_eq!(thick.stroke_width, 1);
        assert_eq!(thick.color.3, 1.0);
    }

    #[test]
    fn test_render_requires_axes() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");
        let error = render_figure(&FigureDescription::new(), path.to_str().unwrap(), None).unwrap_err();
        assert!(matches!(error, MoodyError::Render(_)));
    }

    #[test]
    fn test_render_rejects_non_positive_range() {
        let mut figure = FigureDescription::new();
        default_chart().draw(&mut figure);
        if let Some(axis) = figure.x_axis.as_mut() {
            axis.range = (0.0, 1e8);
        }
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");
        let error = render_figure(&figure, path.to_str().unwrap(), None).unwrap_err();
        assert!(matches!(error, MoodyError::Render(ref message) if message.contains("Reynolds")));
        assert!(!path.exists());
    }

    #[test]
    fn test_svg_backend_is_case_insensitive() {
        assert!(is_svg_path("moody.svg"));
        assert!(is_svg_path("moody.SVG"));
        assert!(is_svg_path("out/moody.Svg"));
        assert!(!is_svg_path("moody.png"));
        assert!(!is_svg_path("moody"));
    }

    #[test]
    fn test_plot_moody_chart_svg() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");
        plot_moody_chart(&default_chart(), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_moody_chart_png() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        let config = RenderConfig::default().with_dpi(50.0);
        plot_moody_chart(&default_chart(), path.to_str().unwrap(), Some(&config)).unwrap();
        assert!(path.exists());
    }
}
