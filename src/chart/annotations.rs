//! Flow-region annotations
//!
//! Four labelled arrows mark the regimes along the chart: laminar, critical
//! and turbulent near the bottom, complete turbulence near the top.

use std::fmt;

use crate::physics::RegimeLimits;

use super::labels::Labels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotRegion {
    Laminar,
    Critical,
    Turbulent,
    FullyRough,
}

impl fmt::Display for PlotRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlotRegion::Laminar => "laminar",
            PlotRegion::Critical => "critical",
            PlotRegion::Turbulent => "turbulent",
            PlotRegion::FullyRough => "fully rough",
        };
        write!(f, "{name}")
    }
}

/// Arrow heads of an annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHeads {
    /// `<->` spanning the region
    Both,

    /// `->` pointing towards increasing Reynolds number
    End,
}

/// Labelled arrow spanning a Reynolds interval at a fixed friction factor
#[derive(Debug, Clone, PartialEq)]
pub struct RegionAnnotation {
    pub region: PlotRegion,
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub friction: f64,
    pub arrow: ArrowHeads,
}

impl RegionAnnotation {
    /// Label position: geometric mean of the span, on the arrow
    pub fn label_anchor(&self) -> (f64, f64) {
        ((self.start * self.end).sqrt(), self.friction)
    }
}

/// The four region annotations of a chart spanning `[re_min, re_max]`
pub fn region_annotations(
    limits: &RegimeLimits,
    labels: &Labels,
    re_min: f64,
    re_max: f64,
) -> Vec<RegionAnnotation> {
    let low = limits.flow_region_arrow_f;
    let high = limits.complete_turbulence_arrow_f;

    vec![
        RegionAnnotation {
            region: PlotRegion::Laminar,
            label: labels.laminar.to_string(),
            start: re_min,
            end: limits.critical_min,
            friction: low,
            arrow: ArrowHeads::Both,
        },
        RegionAnnotation {
            region: PlotRegion::Critical,
            label: labels.critical.to_string(),
            start: limits.critical_min,
            end: limits.critical_max,
            friction: low,
            arrow: ArrowHeads::Both,
        },
        RegionAnnotation {
            region: PlotRegion::Turbulent,
            label: labels.turbulent.to_string(),
            start: limits.critical_max,
            end: re_max,
            friction: low,
            arrow: ArrowHeads::End,
        },
        RegionAnnotation {
            region: PlotRegion::FullyRough,
            label: labels.complete_turbulence.to_string(),
            start: limits.fully_rough_min,
            end: re_max,
            friction: high,
            arrow: ArrowHeads::Both,
        },
    ]
}

// =================================================================================================
// Tests
// =================================================================================================
