//! Hand-drawn log-log grid and tick labels
//!
//! The grid has three tiers per decade:
//!
//! | Tier | Line width | Reynolds multipliers | Friction multipliers |
//! |------|-----------|----------------------|----------------------|
//! | Major | 0.6 pt | 1 | 1 |
//! | Minor | 0.3 pt | 2..9 | 1.5, 2..9 |
//! | Sub-minor | 0.05 pt | 1.2 … 6.5 (12 values) | 1.1 … 9.5 (50 values) |
//!
//! Only major and minor lines carry tick labels.

use std::ops::RangeInclusive;

use super::labels::power_of_ten;

/// Relative slack when deciding whether a grid value lies inside the range
const RANGE_TOLERANCE: f64 = 1e-9;

pub const REYNOLDS_MINOR: [f64; 8] = [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

pub const REYNOLDS_SUB_MINOR: [f64; 12] =
    [1.2, 1.4, 1.6, 1.8, 2.2, 2.4, 2.6, 2.8, 3.5, 4.5, 5.5, 6.5];

pub const FRICTION_MINOR: [f64; 9] = [1.5, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

pub const FRICTION_SUB_MINOR: [f64; 50] = [
    1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.1, 2.2, 2.3, 2.4, 2.5, 2.6, 2.7, 2.8, 2.9,
    3.1, 3.2, 3.3, 3.4, 3.5, 3.6, 3.7, 3.8, 3.9, 4.1, 4.2, 4.3, 4.4, 4.5, 4.6, 4.7, 4.8, 4.9,
    5.2, 5.4, 5.6, 5.8, 6.2, 6.4, 6.6, 6.8, 7.2, 7.4, 7.6, 7.8, 8.5, 9.5,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis; its grid lines are vertical
    Reynolds,

    /// Vertical axis; its grid lines are horizontal
    Friction,
}

impl Axis {
    fn minor_multipliers(&self) -> &'static [f64] {
        match self {
            Axis::Reynolds => &REYNOLDS_MINOR,
            Axis::Friction => &FRICTION_MINOR,
        }
    }

    fn sub_minor_multipliers(&self) -> &'static [f64] {
        match self {
            Axis::Reynolds => &REYNOLDS_SUB_MINOR,
            Axis::Friction => &FRICTION_SUB_MINOR,
        }
    }

    /// Tick text of a minor multiplier
    ///
    /// Reynolds ticks at 8 and 9 stay blank: the decade gets too crowded.
    fn minor_label(&self, multiplier: f64) -> String {
        match self {
            Axis::Reynolds if multiplier >= 8.0 => String::new(),
            _ => format!("{multiplier}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridTier {
    Major,
    Minor,
    SubMinor,
}

impl GridTier {
    /// Stroke width in points
    pub fn line_width_pt(&self) -> f64 {
        match self {
            GridTier::Major => 0.6,
            GridTier::Minor => 0.3,
            GridTier::SubMinor => 0.05,
        }
    }
}

/// One grid line, drawn across the whole plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub axis: Axis,
    pub value: f64,
    pub tier: GridTier,
}

/// Labelled tick position on an axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub axis: Axis,
    pub value: f64,
    pub tier: GridTier,
    pub label: String,
}

/// Decade exponents covering `[min, max]`
pub fn decades(min: f64, max: f64) -> RangeInclusive<i32> {
    (min.log10().floor() as i32)..=(max.log10().ceil() as i32)
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min * (1.0 - RANGE_TOLERANCE) && value <= max * (1.0 + RANGE_TOLERANCE)
}

/// Every grid line of `axis` inside `[min, max]`, decade by decade
pub fn grid_lines(axis: Axis, min: f64, max: f64) -> Vec<GridLine> {
    let mut lines = Vec::new();

    for exponent in decades(min, max) {
        let power = 10f64.powi(exponent);
        let tiers = std::iter::once((1.0, GridTier::Major))
            .chain(axis.minor_multipliers().iter().map(|&m| (m, GridTier::Minor)))
            .chain(axis.sub_minor_multipliers().iter().map(|&m| (m, GridTier::SubMinor)));

        lines.extend(
            tiers
                .map(|(multiplier, tier)| GridLine { axis, value: multiplier * power, tier })
                .filter(|line| in_range(line.value, min, max)),
        );
    }

    lines
}

/// Major and minor ticks of `axis` inside `[min, max]`
pub fn ticks(axis: Axis, min: f64, max: f64) -> Vec<Tick> {
    let mut ticks = Vec::new();

    for exponent in decades(min, max) {
        let power = 10f64.powi(exponent);

        if in_range(power, min, max) {
            ticks.push(Tick {
                axis,
                value: power,
                tier: GridTier::Major,
                label: power_of_ten(exponent),
            });
        }

        for &multiplier in axis.minor_multipliers() {
            let value = multiplier * power;
            if in_range(value, min, max) {
                ticks.push(Tick {
                    axis,
                    value,
                    tier: GridTier::Minor,
                    label: axis.minor_label(multiplier),
                });
            }
        }
    }

    ticks
}

// =================================================================================================
// Tests
// =================================================================================================
