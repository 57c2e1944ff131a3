//! Closed-form friction laws and flow-regime limits
//!
//! # Laminar flow
//!
//! Hagen–Poiseuille gives the Darcy friction factor for fully developed
//! laminar flow in a circular pipe:
//!
//! ```text
//! f = 64 / Re
//! ```
//!
//! On the chart the same law is also drawn, dashed, across the critical zone
//! to show where it would lead. That extension is not a validated regime.
//!
//! # Fully-rough boundary
//!
//! The dashed curve separating transitional turbulence from complete
//! (roughness-dominated) turbulence:
//!
//! ```text
//! f = (1.14 - 2·log10(3500 / Re))^(-2)
//! ```

use serde::{Deserialize, Serialize};

/// Coefficient of the laminar law `f = 64/Re`
pub const LAMINAR_COEFFICIENT: f64 = 64.0;

// =================================================================================================
// Regime limits
// =================================================================================================

/// Reynolds-number boundaries and annotation heights of the chart
///
/// These are chart conventions rather than sharp physical thresholds, so they
/// are data: a caller may move them, e.g. to draw a chart with a different
/// critical zone.
///
/// # Defaults
///
/// | Field | Value |
/// |-------|-------|
/// | `laminar_max` | 2300 |
/// | `critical_min` | 2000 |
/// | `critical_max` | 4000 |
/// | `turbulent_min` | 3000 |
/// | `fully_rough_min` | 1e5 |
/// | `flow_region_arrow_f` | 9.2e-3 |
/// | `complete_turbulence_arrow_f` | 6.1e-2 |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegimeLimits {
    /// Last Reynolds number of the solid laminar curve
    pub laminar_max: f64,

    /// Start of the shaded critical zone
    pub critical_min: f64,

    /// End of the critical zone and of the dashed laminar extension
    pub critical_max: f64,

    /// First Reynolds number of every turbulent curve
    pub turbulent_min: f64,

    /// Start of the "complete turbulence" annotation
    pub fully_rough_min: f64,

    /// Friction factor at which the laminar/critical/turbulent arrows sit
    pub flow_region_arrow_f: f64,

    /// Friction factor at which the complete-turbulence arrow sits
    pub complete_turbulence_arrow_f: f64,
}

impl Default for RegimeLimits {
    fn default() -> Self {
        Self {
            laminar_max: 2300.0,
            critical_min: 2e3,
            critical_max: 4e3,
            turbulent_min: 3000.0,
            fully_rough_min: 1e5,
            flow_region_arrow_f: 9.2e-3,
            complete_turbulence_arrow_f: 6.1e-2,
        }
    }
}

impl RegimeLimits {
    /// Validate that the limits are positive and correctly ordered
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("laminar_max", self.laminar_max),
            ("critical_min", self.critical_min),
            ("critical_max", self.critical_max),
            ("turbulent_min", self.turbulent_min),
            ("fully_rough_min", self.fully_rough_min),
            ("flow_region_arrow_f", self.flow_region_arrow_f),
            ("complete_turbulence_arrow_f", self.complete_turbulence_arrow_f),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("Regime limit {name} must be finite and positive, got {value}"));
            }
        }
        if self.critical_min >= self.critical_max {
            return Err(format!(
                "Critical zone is empty: [{}, {}]",
                self.critical_min, self.critical_max
            ));
        }
        if self.laminar_max > self.critical_max {
            return Err(format!(
                "Laminar limit {} lies beyond the critical zone end {}",
                self.laminar_max, self.critical_max
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Flow regime
// =================================================================================================

/// Flow regime of a Reynolds number with respect to [`RegimeLimits`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// `Re < critical_min`
    Laminar,

    /// `critical_min ≤ Re ≤ critical_max`
    Critical,

    /// `Re > critical_max`
    Turbulent,
}

impl FlowRegime {
    pub fn classify(reynolds: f64, limits: &RegimeLimits) -> Self {
        if reynolds < limits.critical_min {
            FlowRegime::Laminar
        } else if reynolds <= limits.critical_max {
            FlowRegime::Critical
        } else {
            FlowRegime::Turbulent
        }
    }
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FlowRegime::Laminar => "laminar",
            FlowRegime::Critical => "critical",
            FlowRegime::Turbulent => "turbulent",
        };
        write!(f, "{name}")
    }
}

// =================================================================================================
// Closed-form laws
// =================================================================================================

/// Laminar Darcy friction factor `64/Re`
pub fn laminar_friction_factor(reynolds: f64) -> f64 {
    LAMINAR_COEFFICIENT / reynolds
}

/// Friction factor on the boundary of complete turbulence
///
/// `None` below `Re ≈ 942`, where `1.14 - 2·log10(3500/Re)` stops being
/// positive and the correlation has no meaning.
pub fn fully_rough_boundary(reynolds: f64) -> Option<f64> {
    let base = 1.14 - 2.0 * (3500.0 / reynolds).log10();
    (base > 0.0 && base.is_finite()).then(|| base.powi(-2))
}

// =================================================================================================
// Tests
// =================================================================================================
