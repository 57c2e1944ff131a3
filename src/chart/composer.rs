//! Chart composer
//!
//! # Pipeline
//!
//! ```text
//! MoodyConfig ──► validate ──► ReynoldsDomain (log-spaced samples)
//!                                   │
//!        ┌──────────────┬───────────┼────────────────┬───────────────────┐
//!        ▼              ▼           ▼                ▼                   ▼
//!     laminar       transition   turbulent ×N    fully-rough       annotations,
//!     64/Re         64/Re        (solver)         boundary          grid, ticks
//!        └──────────────┴───────────┴────────────────┴───────────────────┘
//!                                   ▼
//!                              MoodyChart
//! ```
//!
//! Only the turbulent curves call the [`FrictionSolver`]; everything else is
//! closed form or layout.
//!
//! # Recoverable conditions
//!
//! A roughness entry whose onset restriction leaves no Reynolds numbers, a
//! closed-form curve with no point in the plot range, and an unrecognized
//! color mode or locale are logged as warnings and recorded as
//! [`Diagnostic`]s. Composition continues.
//!
//! # Example
//!
//! ```rust
//! use moody_chart::chart::{MoodyComposer, MoodyConfig};
//!
//! let chart = MoodyComposer::new(MoodyConfig::default()).compose().unwrap();
//! let summary = chart.summary();
//! assert_eq!(summary.laminar, 1);
//! assert_eq!(summary.turbulent, 27);
//! assert_eq!(summary.annotations, 4);
//! ```

use crate::error::{MoodyError, MoodyResult};
use crate::physics::{fully_rough_boundary, laminar_friction_factor, RoughnessSpec};
use crate::solver::{ColebrookSolver, FrictionSolver};

use super::annotations::region_annotations;
use super::config::{ColorMode, Locale, MoodyConfig};
use super::curves::{CurveKind, FrictionCurve, LineStyle};
use super::domain::{to_dvector, ReynoldsDomain};
use super::grid::{grid_lines, ticks, Axis};
use super::labels::{Labels, RoughnessLabel, RoughnessNotation};
use super::moody::{CriticalZone, Diagnostic, MoodyChart, SecondaryLabel};

/// Roughness labels sit this factor right of the Reynolds axis end
pub const ROUGHNESS_LABEL_OFFSET: f64 = 1.1;

/// The secondary axis label sits this factor right of the Reynolds axis end
pub const SECONDARY_LABEL_OFFSET: f64 = 2.0;

/// Builds [`MoodyChart`]s from a configuration
pub struct MoodyComposer {
    config: MoodyConfig,
    solver: Box<dyn FrictionSolver>,
}

impl MoodyComposer {
    /// Composer using the Colebrook–White solver
    pub fn new(config: MoodyConfig) -> Self {
        Self::with_solver(config, Box::new(ColebrookSolver::new()))
    }

    /// Composer using another turbulent friction model
    pub fn with_solver(config: MoodyConfig, solver: Box<dyn FrictionSolver>) -> Self {
        Self { config, solver }
    }

    pub fn config(&self) -> &MoodyConfig {
        &self.config
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    /// Build the chart
    ///
    /// # Errors
    ///
    /// - [`MoodyError::InvalidConfig`] when the configuration fails validation
    /// - solver errors ([`MoodyError::UndefinedFriction`],
    ///   [`MoodyError::NotConverged`]) are propagated unchanged
    /// - [`MoodyError::InvalidCurve`] when a solver returns the wrong number
    ///   of friction factors
    pub fn compose(&self) -> MoodyResult<MoodyChart> {
        let config = &self.config;
        config.validate().map_err(MoodyError::InvalidConfig)?;

        let mut diagnostics = Vec::new();

        if let ColorMode::Unrecognized(name) = &config.color {
            log::warn!("Unknown color \"{name}\". Using default color cycle.");
            diagnostics.push(Diagnostic::UnknownColorMode(name.clone()));
        }
        if let Locale::Unrecognized(name) = &config.lang {
            log::warn!("Unknown language \"{name}\". Using English labels.");
            diagnostics.push(Diagnostic::UnknownLocale(name.clone()));
        }
        let labels = Labels::for_locale(&config.lang);

        let domain = ReynoldsDomain::log_spaced(config.re_plot_min, config.re_plot_max, config.samples)
            .map_err(MoodyError::InvalidConfig)?;
        let limits = &config.limits;

        let mut curves = Vec::new();

        let laminar = domain.closed_segment(domain.min(), limits.laminar_max);
        curves.extend(closed_form_curve(
            CurveKind::Laminar,
            LineStyle::Solid,
            laminar,
            |re| Some(laminar_friction_factor(re)),
            &mut diagnostics,
        )?);

        let transition = domain.closed_segment(limits.laminar_max, limits.critical_max);
        curves.extend(closed_form_curve(
            CurveKind::Transition,
            LineStyle::Dashed,
            transition,
            |re| Some(laminar_friction_factor(re)),
            &mut diagnostics,
        )?);

        let turbulent = domain.closed_segment(limits.turbulent_min, domain.max());

        let mut roughness_labels = Vec::new();
        for spec in &config.roughness {
            let Some(curve) = self.turbulent_curve(spec, &turbulent, &mut diagnostics)? else {
                continue;
            };
            if let Some(label) = self.roughness_label(spec.relative_roughness, &curve) {
                roughness_labels.push(label);
            }
            curves.push(curve);
        }

        curves.extend(closed_form_curve(
            CurveKind::FullyRoughBoundary,
            LineStyle::Dashed,
            turbulent,
            fully_rough_boundary,
            &mut diagnostics,
        )?);

        let mut grid = grid_lines(Axis::Reynolds, config.re_plot_min, config.re_plot_max);
        grid.extend(grid_lines(Axis::Friction, config.f_plot_min, config.f_plot_max));

        log::debug!(
            "Composed {} curves over {} Reynolds samples with {}",
            curves.len(),
            domain.len(),
            self.solver.name()
        );

        Ok(MoodyChart {
            size: (config.figure_width_in, config.figure_height_in),
            reynolds_range: (config.re_plot_min, config.re_plot_max),
            friction_range: (config.f_plot_min, config.f_plot_max),
            reynolds_label: labels.reynolds_axis.to_string(),
            friction_label: labels.friction_axis.to_string(),
            secondary_label: SecondaryLabel {
                text: labels.roughness_axis.to_string(),
                position: (
                    SECONDARY_LABEL_OFFSET * config.re_plot_max,
                    (config.f_plot_min * config.f_plot_max).sqrt(),
                ),
            },
            curves,
            roughness_labels,
            annotations: region_annotations(limits, &labels, config.re_plot_min, config.re_plot_max),
            grid_lines: grid,
            reynolds_ticks: ticks(Axis::Reynolds, config.re_plot_min, config.re_plot_max),
            friction_ticks: ticks(Axis::Friction, config.f_plot_min, config.f_plot_max),
            critical_zone: CriticalZone {
                reynolds: (limits.critical_min, limits.critical_max),
                friction: (config.f_plot_min, config.f_plot_max),
            },
            palette: config.color.palette(),
            diagnostics,
        })
    }

    /// Solve one roughness entry over its part of the turbulent domain
    ///
    /// `Ok(None)` when the onset restriction leaves nothing to solve.
    fn turbulent_curve(
        &self,
        spec: &RoughnessSpec,
        turbulent: &[f64],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> MoodyResult<Option<FrictionCurve>> {
        let relative_roughness = spec.relative_roughness;

        let reynolds: Vec<f64> = match spec.onset {
            None => turbulent.to_vec(),
            Some(_) => {
                let minimum = spec.minimum_reynolds(self.config.limits.turbulent_min);
                turbulent.iter().copied().filter(|&re| re >= minimum).collect()
            }
        };

        if reynolds.is_empty() {
            log::warn!("Skipping relative roughness {relative_roughness}: no Reynolds numbers in range");
            diagnostics.push(Diagnostic::EmptySubdomain { relative_roughness });
            return Ok(None);
        }

        let solution = self
            .solver
            .solve(&to_dvector(&reynolds), relative_roughness, &self.config.solver)?;

        let curve = FrictionCurve::new(
            CurveKind::Turbulent { relative_roughness },
            LineStyle::Solid,
            reynolds,
            solution.into_vec(),
        )
        .map_err(MoodyError::InvalidCurve)?;

        Ok(Some(curve))
    }

    /// Label for a turbulent curve whose right end lands inside the plot
    fn roughness_label(&self, relative_roughness: f64, curve: &FrictionCurve) -> Option<RoughnessLabel> {
        let config = &self.config;
        let last = curve.last_friction()?;
        if !(last > config.f_plot_min && last < config.f_plot_max) {
            return None;
        }

        let notation = RoughnessNotation::new(relative_roughness)?;
        if config.debug {
            log::info!(
                "rr={relative_roughness} significand={} exponent={}",
                notation.significand_text(),
                notation.exponent
            );
        }

        Some(RoughnessLabel {
            relative_roughness,
            text: notation.to_string(),
            position: (ROUGHNESS_LABEL_OFFSET * config.re_plot_max, curve.min_friction()?),
        })
    }
}

/// Evaluate a closed-form law over `reynolds`, dropping points where it is
/// undefined
///
/// `Ok(None)` and a diagnostic when no point is left.
fn closed_form_curve(
    kind: CurveKind,
    style: LineStyle,
    reynolds: Vec<f64>,
    law: impl Fn(f64) -> Option<f64>,
    diagnostics: &mut Vec<Diagnostic>,
) -> MoodyResult<Option<FrictionCurve>> {
    let (reynolds, friction): (Vec<f64>, Vec<f64>) = reynolds
        .into_iter()
        .filter_map(|re| law(re).map(|f| (re, f)))
        .unzip();

    if reynolds.is_empty() {
        log::warn!("Skipping {kind} curve: no Reynolds numbers in range");
        diagnostics.push(Diagnostic::EmptyCurve { kind });
        return Ok(None);
    }

    FrictionCurve::new(kind, style, reynolds, friction)
        .map(Some)
        .map_err(MoodyError::InvalidCurve)
}

// =================================================================================================
// Tests
// =================================================================================================
