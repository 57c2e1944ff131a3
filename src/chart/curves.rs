//! Friction curves of the chart
//!
//! A [`FrictionCurve`] is a finished polyline: it is built once by the
//! composer and never changed afterwards.

use std::fmt;

/// What a curve represents
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveKind {
    /// `64/Re` up to the laminar limit
    Laminar,

    /// `64/Re` continued, dashed, across the critical zone
    Transition,

    /// Colebrook–White solution at one relative roughness
    Turbulent { relative_roughness: f64 },

    /// Boundary of complete turbulence
    FullyRoughBoundary,
}

impl CurveKind {
    pub fn relative_roughness(&self) -> Option<f64> {
        match self {
            CurveKind::Turbulent { relative_roughness } => Some(*relative_roughness),
            _ => None,
        }
    }

    pub fn is_turbulent(&self) -> bool {
        matches!(self, CurveKind::Turbulent { .. })
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Laminar => write!(f, "laminar"),
            CurveKind::Transition => write!(f, "transition"),
            CurveKind::Turbulent { relative_roughness } => write!(f, "turbulent (rr={relative_roughness})"),
            CurveKind::FullyRoughBoundary => write!(f, "fully-rough boundary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

// =================================================================================================
// Curve
// =================================================================================================

/// Friction factor against Reynolds number
#[derive(Debug, Clone, PartialEq)]
pub struct FrictionCurve {
    kind: CurveKind,
    style: LineStyle,
    reynolds: Vec<f64>,
    friction: Vec<f64>,
}

impl FrictionCurve {
    /// Build a curve from matching Reynolds and friction sequences
    ///
    /// # Errors
    ///
    /// Returns `Err` when the lengths differ.
    pub fn new(
        kind: CurveKind,
        style: LineStyle,
        reynolds: Vec<f64>,
        friction: Vec<f64>,
    ) -> Result<Self, String> {
        if reynolds.len() != friction.len() {
            return Err(format!(
                "Curve {kind}: {} Reynolds values for {} friction values",
                reynolds.len(),
                friction.len()
            ));
        }
        Ok(Self { kind, style, reynolds, friction })
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }

    pub fn reynolds(&self) -> &[f64] {
        &self.reynolds
    }

    pub fn friction(&self) -> &[f64] {
        &self.friction
    }

    pub fn len(&self) -> usize {
        self.reynolds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reynolds.is_empty()
    }

    /// `(Re, f)` pairs in drawing order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        self.reynolds.iter().copied().zip(self.friction.iter().copied())
    }

    /// Friction factor at the largest Reynolds number
    pub fn last_friction(&self) -> Option<f64> {
        self.friction.last().copied()
    }

    pub fn min_friction(&self) -> Option<f64> {
        self.friction.iter().copied().reduce(f64::min)
    }

    /// Check the curve invariants against the plotted Reynolds range
    ///
    /// Reynolds numbers strictly increasing and inside `[re_min, re_max]`,
    /// every friction factor finite and positive.
    pub fn validate(&self, re_min: f64, re_max: f64) -> Result<(), String> {
        if let Some(w) = self.reynolds.windows(2).find(|w| w[0] >= w[1]) {
            return Err(format!(
                "Curve {}: Reynolds numbers not strictly increasing at {} -> {}",
                self.kind, w[0], w[1]
            ));
        }
        if let Some(re) = self.reynolds.iter().find(|&&re| re < re_min || re > re_max) {
            return Err(format!(
                "Curve {}: Re={re} outside [{re_min}, {re_max}]",
                self.kind
            ));
        }
        if let Some(f) = self.friction.iter().find(|f| !f.is_finite() || **f <= 0.0) {
            return Err(format!("Curve {}: invalid friction factor {f}", self.kind));
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn laminar() -> FrictionCurve {
        FrictionCurve::new(
            CurveKind::Laminar,
            LineStyle::Solid,
            vec![500.0, 1000.0, 2300.0],
            vec![0.128, 0.064, 64.0 / 2300.0],
        )
        .unwrap()
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let result = FrictionCurve::new(CurveKind::Laminar, LineStyle::Solid, vec![1.0, 2.0], vec![1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_accessors() {
        let curve = laminar();
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.kind(), CurveKind::Laminar);
        assert_eq!(curve.style(), LineStyle::Solid);
        assert_eq!(curve.last_friction(), Some(64.0 / 2300.0));
        assert_eq!(curve.min_friction(), Some(64.0 / 2300.0));
        assert_eq!(curve.points().next(), Some((500.0, 0.128)));
    }

    #[test]
    fn test_validate_accepts_well_formed_curve() {
        assert!(laminar().validate(500.0, 1e8).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(laminar().validate(600.0, 1e8).unwrap_err().contains("outside"));
    }

    #[test]
    fn test_validate_rejects_non_increasing_reynolds() {
        let curve = FrictionCurve::new(
            CurveKind::Transition,
            LineStyle::Dashed,
            vec![2300.0, 2300.0],
            vec![0.03, 0.03],
        )
        .unwrap();
        assert!(curve.validate(500.0, 1e8).unwrap_err().contains("strictly increasing"));
    }

    #[test]
    fn test_validate_rejects_nan_friction() {
        let curve = FrictionCurve::new(
            CurveKind::Turbulent { relative_roughness: 1e-3 },
            LineStyle::Solid,
            vec![3000.0, 4000.0],
            vec![0.04, f64::NAN],
        )
        .unwrap();
        assert!(curve.validate(500.0, 1e8).is_err());
    }

    #[test]
    fn test_kind_helpers() {
        let kind = CurveKind::Turbulent { relative_roughness: 2e-4 };
        assert!(kind.is_turbulent());
        assert_eq!(kind.relative_roughness(), Some(2e-4));
        assert_eq!(CurveKind::Laminar.relative_roughness(), None);
        assert_eq!(CurveKind::FullyRoughBoundary.to_string(), "fully-rough boundary");
    }
}
